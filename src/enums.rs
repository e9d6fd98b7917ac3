//! Symbolic names for GL constants
//!
//! Each table is a closed Rust enum whose discriminant is the raw GL value, so a
//! blend factor can never be passed where a buffer target is expected. Coverage is
//! partial on purpose; a constant with no entry here cannot be reached through the
//! typed wrappers until someone adds it.

use crate::ffi::{self, GLbitfield, GLenum};
use bitflags::bitflags;

macro_rules! gl_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $( $(#[$inner:meta])* $variant:ident = $raw:path ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$inner])* $variant = $raw, )+
        }

        impl $name {
            /// Every entry of this table
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn to_raw(self) -> GLenum {
                self as GLenum
            }

            pub fn from_raw(raw: GLenum) -> Option<Self> {
                match raw {
                    $( $raw => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for GLenum {
            fn from(value: $name) -> Self {
                value.to_raw()
            }
        }

        impl TryFrom<GLenum> for $name {
            type Error = GLenum;

            fn try_from(raw: GLenum) -> Result<Self, GLenum> {
                Self::from_raw(raw).ok_or(raw)
            }
        }
    };
}

// =============================================================================
// Buffers
// =============================================================================

gl_enum! {
    /// Binding points for `glBindBuffer`
    pub enum BufferTarget {
        Array = ffi::ARRAY_BUFFER,
        ElementArray = ffi::ELEMENT_ARRAY_BUFFER,
        PixelPack = ffi::PIXEL_PACK_BUFFER,
        PixelUnpack = ffi::PIXEL_UNPACK_BUFFER,
        Uniform = ffi::UNIFORM_BUFFER,
        Texture = ffi::TEXTURE_BUFFER,
        TransformFeedback = ffi::TRANSFORM_FEEDBACK_BUFFER,
        CopyRead = ffi::COPY_READ_BUFFER,
        CopyWrite = ffi::COPY_WRITE_BUFFER,
        DrawIndirect = ffi::DRAW_INDIRECT_BUFFER,
        ShaderStorage = ffi::SHADER_STORAGE_BUFFER,
        DispatchIndirect = ffi::DISPATCH_INDIRECT_BUFFER,
        Query = ffi::QUERY_BUFFER,
        AtomicCounter = ffi::ATOMIC_COUNTER_BUFFER,
    }
}

gl_enum! {
    /// Targets that have indexed binding points (`glBindBufferBase`)
    pub enum IndexedBufferTarget {
        Uniform = ffi::UNIFORM_BUFFER,
        ShaderStorage = ffi::SHADER_STORAGE_BUFFER,
        TransformFeedback = ffi::TRANSFORM_FEEDBACK_BUFFER,
        AtomicCounter = ffi::ATOMIC_COUNTER_BUFFER,
    }
}

gl_enum! {
    pub enum BufferUsage {
        StreamDraw = ffi::STREAM_DRAW,
        StreamRead = ffi::STREAM_READ,
        StreamCopy = ffi::STREAM_COPY,
        StaticDraw = ffi::STATIC_DRAW,
        StaticRead = ffi::STATIC_READ,
        StaticCopy = ffi::STATIC_COPY,
        DynamicDraw = ffi::DYNAMIC_DRAW,
        DynamicRead = ffi::DYNAMIC_READ,
        DynamicCopy = ffi::DYNAMIC_COPY,
    }
}

gl_enum! {
    pub enum BufferParameter {
        Size = ffi::BUFFER_SIZE,
        Usage = ffi::BUFFER_USAGE,
        AccessFlags = ffi::BUFFER_ACCESS_FLAGS,
        Mapped = ffi::BUFFER_MAPPED,
        MapLength = ffi::BUFFER_MAP_LENGTH,
        MapOffset = ffi::BUFFER_MAP_OFFSET,
        ImmutableStorage = ffi::BUFFER_IMMUTABLE_STORAGE,
        StorageFlags = ffi::BUFFER_STORAGE_FLAGS,
    }
}

bitflags! {
    /// Access bits for `glMapBufferRange`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MapAccess: GLbitfield {
        const READ = ffi::MAP_READ_BIT;
        const WRITE = ffi::MAP_WRITE_BIT;
        const INVALIDATE_RANGE = ffi::MAP_INVALIDATE_RANGE_BIT;
        const INVALIDATE_BUFFER = ffi::MAP_INVALIDATE_BUFFER_BIT;
        const FLUSH_EXPLICIT = ffi::MAP_FLUSH_EXPLICIT_BIT;
        const UNSYNCHRONIZED = ffi::MAP_UNSYNCHRONIZED_BIT;
        const PERSISTENT = ffi::MAP_PERSISTENT_BIT;
        const COHERENT = ffi::MAP_COHERENT_BIT;
    }
}

bitflags! {
    /// Flags for immutable buffer storage
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferStorageFlags: GLbitfield {
        const MAP_READ = ffi::MAP_READ_BIT;
        const MAP_WRITE = ffi::MAP_WRITE_BIT;
        const MAP_PERSISTENT = ffi::MAP_PERSISTENT_BIT;
        const MAP_COHERENT = ffi::MAP_COHERENT_BIT;
        const DYNAMIC_STORAGE = ffi::DYNAMIC_STORAGE_BIT;
        const CLIENT_STORAGE = ffi::CLIENT_STORAGE_BIT;
    }
}

// =============================================================================
// Vertex input and drawing
// =============================================================================

gl_enum! {
    pub enum PrimitiveMode {
        Points = ffi::POINTS,
        Lines = ffi::LINES,
        LineLoop = ffi::LINE_LOOP,
        LineStrip = ffi::LINE_STRIP,
        Triangles = ffi::TRIANGLES,
        TriangleStrip = ffi::TRIANGLE_STRIP,
        TriangleFan = ffi::TRIANGLE_FAN,
        LinesAdjacency = ffi::LINES_ADJACENCY,
        LineStripAdjacency = ffi::LINE_STRIP_ADJACENCY,
        TrianglesAdjacency = ffi::TRIANGLES_ADJACENCY,
        TriangleStripAdjacency = ffi::TRIANGLE_STRIP_ADJACENCY,
        Patches = ffi::PATCHES,
    }
}

gl_enum! {
    /// Element types for indexed draws
    pub enum IndexType {
        U8 = ffi::UNSIGNED_BYTE,
        U16 = ffi::UNSIGNED_SHORT,
        U32 = ffi::UNSIGNED_INT,
    }
}

impl IndexType {
    pub const fn size_in_bytes(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

gl_enum! {
    /// Component types for vertex attributes
    pub enum VertexAttribType {
        I8 = ffi::BYTE,
        U8 = ffi::UNSIGNED_BYTE,
        I16 = ffi::SHORT,
        U16 = ffi::UNSIGNED_SHORT,
        I32 = ffi::INT,
        U32 = ffi::UNSIGNED_INT,
        F16 = ffi::HALF_FLOAT,
        F32 = ffi::FLOAT,
        F64 = ffi::DOUBLE,
        Fixed = ffi::FIXED,
        Int2101010Rev = ffi::INT_2_10_10_10_REV,
        UnsignedInt2101010Rev = ffi::UNSIGNED_INT_2_10_10_10_REV,
        UnsignedInt10f11f11fRev = ffi::UNSIGNED_INT_10F_11F_11F_REV,
    }
}

// =============================================================================
// Shaders and programs
// =============================================================================

gl_enum! {
    pub enum ShaderType {
        Vertex = ffi::VERTEX_SHADER,
        Fragment = ffi::FRAGMENT_SHADER,
        Geometry = ffi::GEOMETRY_SHADER,
        TessControl = ffi::TESS_CONTROL_SHADER,
        TessEvaluation = ffi::TESS_EVALUATION_SHADER,
        Compute = ffi::COMPUTE_SHADER,
    }
}

gl_enum! {
    /// `pname` values accepted by `glGetShaderiv`
    pub enum ShaderParameter {
        ShaderType = ffi::SHADER_TYPE,
        DeleteStatus = ffi::DELETE_STATUS,
        CompileStatus = ffi::COMPILE_STATUS,
        InfoLogLength = ffi::INFO_LOG_LENGTH,
        SourceLength = ffi::SHADER_SOURCE_LENGTH,
    }
}

gl_enum! {
    /// `pname` values accepted by `glGetProgramiv`
    pub enum ProgramParameter {
        DeleteStatus = ffi::DELETE_STATUS,
        LinkStatus = ffi::LINK_STATUS,
        ValidateStatus = ffi::VALIDATE_STATUS,
        InfoLogLength = ffi::INFO_LOG_LENGTH,
        AttachedShaders = ffi::ATTACHED_SHADERS,
        ActiveUniforms = ffi::ACTIVE_UNIFORMS,
        ActiveUniformMaxLength = ffi::ACTIVE_UNIFORM_MAX_LENGTH,
        ActiveAttributes = ffi::ACTIVE_ATTRIBUTES,
        ActiveAttributeMaxLength = ffi::ACTIVE_ATTRIBUTE_MAX_LENGTH,
        ActiveUniformBlocks = ffi::ACTIVE_UNIFORM_BLOCKS,
        Separable = ffi::PROGRAM_SEPARABLE,
    }
}

bitflags! {
    /// Stages for `glUseProgramStages`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStages: GLbitfield {
        const VERTEX = ffi::VERTEX_SHADER_BIT;
        const FRAGMENT = ffi::FRAGMENT_SHADER_BIT;
        const GEOMETRY = ffi::GEOMETRY_SHADER_BIT;
        const TESS_CONTROL = ffi::TESS_CONTROL_SHADER_BIT;
        const TESS_EVALUATION = ffi::TESS_EVALUATION_SHADER_BIT;
        const COMPUTE = ffi::COMPUTE_SHADER_BIT;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemoryBarrier: GLbitfield {
        const VERTEX_ATTRIB_ARRAY = ffi::VERTEX_ATTRIB_ARRAY_BARRIER_BIT;
        const ELEMENT_ARRAY = ffi::ELEMENT_ARRAY_BARRIER_BIT;
        const UNIFORM = ffi::UNIFORM_BARRIER_BIT;
        const TEXTURE_FETCH = ffi::TEXTURE_FETCH_BARRIER_BIT;
        const SHADER_IMAGE_ACCESS = ffi::SHADER_IMAGE_ACCESS_BARRIER_BIT;
        const COMMAND = ffi::COMMAND_BARRIER_BIT;
        const PIXEL_BUFFER = ffi::PIXEL_BUFFER_BARRIER_BIT;
        const TEXTURE_UPDATE = ffi::TEXTURE_UPDATE_BARRIER_BIT;
        const BUFFER_UPDATE = ffi::BUFFER_UPDATE_BARRIER_BIT;
        const FRAMEBUFFER = ffi::FRAMEBUFFER_BARRIER_BIT;
        const TRANSFORM_FEEDBACK = ffi::TRANSFORM_FEEDBACK_BARRIER_BIT;
        const ATOMIC_COUNTER = ffi::ATOMIC_COUNTER_BARRIER_BIT;
        const SHADER_STORAGE = ffi::SHADER_STORAGE_BARRIER_BIT;
    }
}

// =============================================================================
// Textures and pixels
// =============================================================================

gl_enum! {
    /// Binding points for `glBindTexture`
    pub enum TextureTarget {
        Texture1D = ffi::TEXTURE_1D,
        Texture2D = ffi::TEXTURE_2D,
        Texture3D = ffi::TEXTURE_3D,
        Texture1DArray = ffi::TEXTURE_1D_ARRAY,
        Texture2DArray = ffi::TEXTURE_2D_ARRAY,
        Rectangle = ffi::TEXTURE_RECTANGLE,
        CubeMap = ffi::TEXTURE_CUBE_MAP,
        CubeMapArray = ffi::TEXTURE_CUBE_MAP_ARRAY,
        Buffer = ffi::TEXTURE_BUFFER,
        Texture2DMultisample = ffi::TEXTURE_2D_MULTISAMPLE,
        Texture2DMultisampleArray = ffi::TEXTURE_2D_MULTISAMPLE_ARRAY,
    }
}

gl_enum! {
    /// Image targets accepted by the 2D image upload calls
    pub enum TexImageTarget {
        Texture2D = ffi::TEXTURE_2D,
        Texture1DArray = ffi::TEXTURE_1D_ARRAY,
        Rectangle = ffi::TEXTURE_RECTANGLE,
        CubeMapPositiveX = ffi::TEXTURE_CUBE_MAP_POSITIVE_X,
        CubeMapNegativeX = ffi::TEXTURE_CUBE_MAP_NEGATIVE_X,
        CubeMapPositiveY = ffi::TEXTURE_CUBE_MAP_POSITIVE_Y,
        CubeMapNegativeY = ffi::TEXTURE_CUBE_MAP_NEGATIVE_Y,
        CubeMapPositiveZ = ffi::TEXTURE_CUBE_MAP_POSITIVE_Z,
        CubeMapNegativeZ = ffi::TEXTURE_CUBE_MAP_NEGATIVE_Z,
    }
}

gl_enum! {
    /// Client-side pixel layout
    pub enum PixelFormat {
        Red = ffi::RED,
        Rg = ffi::RG,
        Rgb = ffi::RGB,
        Rgba = ffi::RGBA,
        Bgr = ffi::BGR,
        Bgra = ffi::BGRA,
        RedInteger = ffi::RED_INTEGER,
        RgInteger = ffi::RG_INTEGER,
        RgbInteger = ffi::RGB_INTEGER,
        RgbaInteger = ffi::RGBA_INTEGER,
        DepthComponent = ffi::DEPTH_COMPONENT,
        DepthStencil = ffi::DEPTH_STENCIL,
        StencilIndex = ffi::STENCIL_INDEX,
    }
}

gl_enum! {
    /// Client-side pixel component type
    pub enum PixelType {
        U8 = ffi::UNSIGNED_BYTE,
        I8 = ffi::BYTE,
        U16 = ffi::UNSIGNED_SHORT,
        I16 = ffi::SHORT,
        U32 = ffi::UNSIGNED_INT,
        I32 = ffi::INT,
        F16 = ffi::HALF_FLOAT,
        F32 = ffi::FLOAT,
        UnsignedShort565 = ffi::UNSIGNED_SHORT_5_6_5,
        UnsignedShort4444 = ffi::UNSIGNED_SHORT_4_4_4_4,
        UnsignedShort5551 = ffi::UNSIGNED_SHORT_5_5_5_1,
        UnsignedInt8888 = ffi::UNSIGNED_INT_8_8_8_8,
        UnsignedInt8888Rev = ffi::UNSIGNED_INT_8_8_8_8_REV,
        UnsignedInt2101010Rev = ffi::UNSIGNED_INT_2_10_10_10_REV,
        UnsignedInt10f11f11fRev = ffi::UNSIGNED_INT_10F_11F_11F_REV,
        UnsignedInt248 = ffi::UNSIGNED_INT_24_8,
        Float32UnsignedInt248Rev = ffi::FLOAT_32_UNSIGNED_INT_24_8_REV,
    }
}

gl_enum! {
    /// Sized internal formats for texture and renderbuffer storage
    pub enum InternalFormat {
        R8 = ffi::R8,
        R16 = ffi::R16,
        Rg8 = ffi::RG8,
        Rgb8 = ffi::RGB8,
        Rgba8 = ffi::RGBA8,
        Srgb8 = ffi::SRGB8,
        Srgb8Alpha8 = ffi::SRGB8_ALPHA8,
        Rgb10A2 = ffi::RGB10_A2,
        R16F = ffi::R16F,
        Rg16F = ffi::RG16F,
        Rgb16F = ffi::RGB16F,
        Rgba16F = ffi::RGBA16F,
        R32F = ffi::R32F,
        Rg32F = ffi::RG32F,
        Rgb32F = ffi::RGB32F,
        Rgba32F = ffi::RGBA32F,
        R11FG11FB10F = ffi::R11F_G11F_B10F,
        R8UI = ffi::R8UI,
        Rgba8UI = ffi::RGBA8UI,
        R32I = ffi::R32I,
        R32UI = ffi::R32UI,
        DepthComponent16 = ffi::DEPTH_COMPONENT16,
        DepthComponent24 = ffi::DEPTH_COMPONENT24,
        DepthComponent32F = ffi::DEPTH_COMPONENT32F,
        Depth24Stencil8 = ffi::DEPTH24_STENCIL8,
        Depth32FStencil8 = ffi::DEPTH32F_STENCIL8,
        StencilIndex8 = ffi::STENCIL_INDEX8,
    }
}

gl_enum! {
    pub enum TextureMinFilter {
        Nearest = ffi::NEAREST,
        Linear = ffi::LINEAR,
        NearestMipmapNearest = ffi::NEAREST_MIPMAP_NEAREST,
        LinearMipmapNearest = ffi::LINEAR_MIPMAP_NEAREST,
        NearestMipmapLinear = ffi::NEAREST_MIPMAP_LINEAR,
        LinearMipmapLinear = ffi::LINEAR_MIPMAP_LINEAR,
    }
}

gl_enum! {
    pub enum TextureMagFilter {
        Nearest = ffi::NEAREST,
        Linear = ffi::LINEAR,
    }
}

gl_enum! {
    pub enum TextureWrap {
        Repeat = ffi::REPEAT,
        ClampToEdge = ffi::CLAMP_TO_EDGE,
        ClampToBorder = ffi::CLAMP_TO_BORDER,
        MirroredRepeat = ffi::MIRRORED_REPEAT,
        MirrorClampToEdge = ffi::MIRROR_CLAMP_TO_EDGE,
    }
}

gl_enum! {
    pub enum TextureCompareMode {
        None = ffi::NONE,
        CompareRefToTexture = ffi::COMPARE_REF_TO_TEXTURE,
    }
}

gl_enum! {
    /// Depth, stencil and texture comparison functions
    pub enum CompareFunc {
        Never = ffi::NEVER,
        Less = ffi::LESS,
        Equal = ffi::EQUAL,
        LessOrEqual = ffi::LEQUAL,
        Greater = ffi::GREATER,
        NotEqual = ffi::NOTEQUAL,
        GreaterOrEqual = ffi::GEQUAL,
        Always = ffi::ALWAYS,
    }
}

gl_enum! {
    pub enum PixelStoreParameter {
        UnpackRowLength = ffi::UNPACK_ROW_LENGTH,
        UnpackAlignment = ffi::UNPACK_ALIGNMENT,
        PackRowLength = ffi::PACK_ROW_LENGTH,
        PackAlignment = ffi::PACK_ALIGNMENT,
    }
}

// =============================================================================
// Fixed-function state
// =============================================================================

gl_enum! {
    pub enum BlendFactor {
        Zero = ffi::ZERO,
        One = ffi::ONE,
        SrcColor = ffi::SRC_COLOR,
        OneMinusSrcColor = ffi::ONE_MINUS_SRC_COLOR,
        SrcAlpha = ffi::SRC_ALPHA,
        OneMinusSrcAlpha = ffi::ONE_MINUS_SRC_ALPHA,
        DstAlpha = ffi::DST_ALPHA,
        OneMinusDstAlpha = ffi::ONE_MINUS_DST_ALPHA,
        DstColor = ffi::DST_COLOR,
        OneMinusDstColor = ffi::ONE_MINUS_DST_COLOR,
        SrcAlphaSaturate = ffi::SRC_ALPHA_SATURATE,
        ConstantColor = ffi::CONSTANT_COLOR,
        OneMinusConstantColor = ffi::ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = ffi::CONSTANT_ALPHA,
        OneMinusConstantAlpha = ffi::ONE_MINUS_CONSTANT_ALPHA,
    }
}

gl_enum! {
    pub enum BlendEquation {
        Add = ffi::FUNC_ADD,
        Subtract = ffi::FUNC_SUBTRACT,
        ReverseSubtract = ffi::FUNC_REVERSE_SUBTRACT,
        Min = ffi::MIN,
        Max = ffi::MAX,
    }
}

gl_enum! {
    /// Server-side capabilities for `glEnable`/`glDisable`
    pub enum Capability {
        Blend = ffi::BLEND,
        CullFace = ffi::CULL_FACE,
        DepthTest = ffi::DEPTH_TEST,
        StencilTest = ffi::STENCIL_TEST,
        ScissorTest = ffi::SCISSOR_TEST,
        Dither = ffi::DITHER,
        PolygonOffsetFill = ffi::POLYGON_OFFSET_FILL,
        Multisample = ffi::MULTISAMPLE,
        SampleAlphaToCoverage = ffi::SAMPLE_ALPHA_TO_COVERAGE,
        FramebufferSrgb = ffi::FRAMEBUFFER_SRGB,
        PrimitiveRestart = ffi::PRIMITIVE_RESTART,
        PrimitiveRestartFixedIndex = ffi::PRIMITIVE_RESTART_FIXED_INDEX,
        RasterizerDiscard = ffi::RASTERIZER_DISCARD,
        ProgramPointSize = ffi::PROGRAM_POINT_SIZE,
        TextureCubeMapSeamless = ffi::TEXTURE_CUBE_MAP_SEAMLESS,
        DepthClamp = ffi::DEPTH_CLAMP,
        DebugOutput = ffi::DEBUG_OUTPUT,
        DebugOutputSynchronous = ffi::DEBUG_OUTPUT_SYNCHRONOUS,
    }
}

gl_enum! {
    pub enum Face {
        Front = ffi::FRONT,
        Back = ffi::BACK,
        FrontAndBack = ffi::FRONT_AND_BACK,
    }
}

gl_enum! {
    pub enum FrontFace {
        Clockwise = ffi::CW,
        CounterClockwise = ffi::CCW,
    }
}

gl_enum! {
    pub enum PolygonMode {
        Point = ffi::POINT,
        Line = ffi::LINE,
        Fill = ffi::FILL,
    }
}

gl_enum! {
    pub enum StencilOp {
        Keep = ffi::KEEP,
        Zero = ffi::ZERO,
        Replace = ffi::REPLACE,
        Increment = ffi::INCR,
        IncrementWrap = ffi::INCR_WRAP,
        Decrement = ffi::DECR,
        DecrementWrap = ffi::DECR_WRAP,
        Invert = ffi::INVERT,
    }
}

bitflags! {
    /// Buffers cleared by `glClear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: GLbitfield {
        const COLOR = ffi::COLOR_BUFFER_BIT;
        const DEPTH = ffi::DEPTH_BUFFER_BIT;
        const STENCIL = ffi::STENCIL_BUFFER_BIT;
    }
}

// =============================================================================
// Framebuffers
// =============================================================================

gl_enum! {
    pub enum FramebufferTarget {
        Framebuffer = ffi::FRAMEBUFFER,
        Read = ffi::READ_FRAMEBUFFER,
        Draw = ffi::DRAW_FRAMEBUFFER,
    }
}

gl_enum! {
    pub enum RenderbufferTarget {
        Renderbuffer = ffi::RENDERBUFFER,
    }
}

gl_enum! {
    /// Result of a framebuffer completeness check
    pub enum FramebufferStatus {
        Complete = ffi::FRAMEBUFFER_COMPLETE,
        Undefined = ffi::FRAMEBUFFER_UNDEFINED,
        IncompleteAttachment = ffi::FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
        IncompleteMissingAttachment = ffi::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        IncompleteDrawBuffer = ffi::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER,
        IncompleteReadBuffer = ffi::FRAMEBUFFER_INCOMPLETE_READ_BUFFER,
        Unsupported = ffi::FRAMEBUFFER_UNSUPPORTED,
        IncompleteMultisample = ffi::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE,
        IncompleteLayerTargets = ffi::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS,
    }
}

impl FramebufferStatus {
    pub fn is_complete(self) -> bool {
        self == FramebufferStatus::Complete
    }
}

gl_enum! {
    pub enum BlitFilter {
        Nearest = ffi::NEAREST,
        Linear = ffi::LINEAR,
    }
}

/// Number of color attachment points GL reserves names for
pub const COLOR_ATTACHMENT_COUNT: u32 = 32;

/// Framebuffer attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// `GL_COLOR_ATTACHMENTi`, `i < 32`
    Color(u32),
    Depth,
    Stencil,
    DepthStencil,
}

impl Attachment {
    pub fn to_raw(self) -> GLenum {
        match self {
            Attachment::Color(index) => {
                assert!(
                    index < COLOR_ATTACHMENT_COUNT,
                    "color attachment {index} out of range"
                );
                ffi::COLOR_ATTACHMENT0 + index
            }
            Attachment::Depth => ffi::DEPTH_ATTACHMENT,
            Attachment::Stencil => ffi::STENCIL_ATTACHMENT,
            Attachment::DepthStencil => ffi::DEPTH_STENCIL_ATTACHMENT,
        }
    }

    pub fn from_raw(raw: GLenum) -> Option<Self> {
        match raw {
            ffi::DEPTH_ATTACHMENT => Some(Attachment::Depth),
            ffi::STENCIL_ATTACHMENT => Some(Attachment::Stencil),
            ffi::DEPTH_STENCIL_ATTACHMENT => Some(Attachment::DepthStencil),
            _ => raw
                .checked_sub(ffi::COLOR_ATTACHMENT0)
                .filter(|index| *index < COLOR_ATTACHMENT_COUNT)
                .map(Attachment::Color),
        }
    }
}

/// Draw buffer selector for `glDrawBuffers`/`glReadBuffer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawBuffer {
    None,
    Color(u32),
}

impl DrawBuffer {
    pub fn to_raw(self) -> GLenum {
        match self {
            DrawBuffer::None => ffi::NONE,
            DrawBuffer::Color(index) => Attachment::Color(index).to_raw(),
        }
    }
}

// =============================================================================
// Queries and sync
// =============================================================================

gl_enum! {
    pub enum StringName {
        Vendor = ffi::VENDOR,
        Renderer = ffi::RENDERER,
        Version = ffi::VERSION,
        ShadingLanguageVersion = ffi::SHADING_LANGUAGE_VERSION,
        Extensions = ffi::EXTENSIONS,
    }
}

gl_enum! {
    /// Single-integer state for `glGetIntegerv`
    pub enum IntegerName {
        MajorVersion = ffi::MAJOR_VERSION,
        MinorVersion = ffi::MINOR_VERSION,
        NumExtensions = ffi::NUM_EXTENSIONS,
        ContextFlags = ffi::CONTEXT_FLAGS,
        MaxTextureSize = ffi::MAX_TEXTURE_SIZE,
        MaxRenderbufferSize = ffi::MAX_RENDERBUFFER_SIZE,
        MaxVertexAttribs = ffi::MAX_VERTEX_ATTRIBS,
        MaxTextureImageUnits = ffi::MAX_TEXTURE_IMAGE_UNITS,
        MaxCombinedTextureImageUnits = ffi::MAX_COMBINED_TEXTURE_IMAGE_UNITS,
        MaxUniformBufferBindings = ffi::MAX_UNIFORM_BUFFER_BINDINGS,
        MaxDrawBuffers = ffi::MAX_DRAW_BUFFERS,
        MaxColorAttachments = ffi::MAX_COLOR_ATTACHMENTS,
        MaxSamples = ffi::MAX_SAMPLES,
    }
}

gl_enum! {
    /// Multi-integer state for `glGetIntegerv`
    pub enum IntegerVecName {
        Viewport = ffi::VIEWPORT,
        ScissorBox = ffi::SCISSOR_BOX,
        MaxViewportDims = ffi::MAX_VIEWPORT_DIMS,
    }
}

impl IntegerVecName {
    /// Number of integers the driver writes for this name
    pub const fn count(self) -> usize {
        match self {
            IntegerVecName::Viewport | IntegerVecName::ScissorBox => 4,
            IntegerVecName::MaxViewportDims => 2,
        }
    }
}

gl_enum! {
    /// Single-float state for `glGetFloatv`
    pub enum FloatName {
        LineWidth = ffi::LINE_WIDTH,
        MaxTextureLodBias = ffi::MAX_TEXTURE_LOD_BIAS,
        MaxTextureMaxAnisotropy = ffi::MAX_TEXTURE_MAX_ANISOTROPY,
    }
}

gl_enum! {
    pub enum SyncCondition {
        GpuCommandsComplete = ffi::SYNC_GPU_COMMANDS_COMPLETE,
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyncFlags: GLbitfield {
        const FLUSH_COMMANDS = ffi::SYNC_FLUSH_COMMANDS_BIT;
    }
}

gl_enum! {
    /// Outcome of `glClientWaitSync`
    pub enum WaitResult {
        AlreadySignaled = ffi::ALREADY_SIGNALED,
        TimeoutExpired = ffi::TIMEOUT_EXPIRED,
        ConditionSatisfied = ffi::CONDITION_SATISFIED,
        WaitFailed = ffi::WAIT_FAILED,
    }
}

impl WaitResult {
    /// True when the fence has been reached
    pub fn is_signaled(self) -> bool {
        matches!(self, WaitResult::AlreadySignaled | WaitResult::ConditionSatisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<T>(all: &[T], to_raw: fn(T) -> GLenum, from_raw: fn(GLenum) -> Option<T>)
    where
        T: Copy + PartialEq + std::fmt::Debug,
    {
        assert!(!all.is_empty());
        for &value in all {
            assert_eq!(from_raw(to_raw(value)), Some(value), "{value:?}");
        }
    }

    #[test]
    fn test_every_table_round_trips() {
        assert_round_trip(BufferTarget::ALL, BufferTarget::to_raw, BufferTarget::from_raw);
        assert_round_trip(
            IndexedBufferTarget::ALL,
            IndexedBufferTarget::to_raw,
            IndexedBufferTarget::from_raw,
        );
        assert_round_trip(BufferUsage::ALL, BufferUsage::to_raw, BufferUsage::from_raw);
        assert_round_trip(BufferParameter::ALL, BufferParameter::to_raw, BufferParameter::from_raw);
        assert_round_trip(PrimitiveMode::ALL, PrimitiveMode::to_raw, PrimitiveMode::from_raw);
        assert_round_trip(IndexType::ALL, IndexType::to_raw, IndexType::from_raw);
        assert_round_trip(VertexAttribType::ALL, VertexAttribType::to_raw, VertexAttribType::from_raw);
        assert_round_trip(ShaderType::ALL, ShaderType::to_raw, ShaderType::from_raw);
        assert_round_trip(ShaderParameter::ALL, ShaderParameter::to_raw, ShaderParameter::from_raw);
        assert_round_trip(ProgramParameter::ALL, ProgramParameter::to_raw, ProgramParameter::from_raw);
        assert_round_trip(TextureTarget::ALL, TextureTarget::to_raw, TextureTarget::from_raw);
        assert_round_trip(TexImageTarget::ALL, TexImageTarget::to_raw, TexImageTarget::from_raw);
        assert_round_trip(PixelFormat::ALL, PixelFormat::to_raw, PixelFormat::from_raw);
        assert_round_trip(PixelType::ALL, PixelType::to_raw, PixelType::from_raw);
        assert_round_trip(InternalFormat::ALL, InternalFormat::to_raw, InternalFormat::from_raw);
        assert_round_trip(TextureMinFilter::ALL, TextureMinFilter::to_raw, TextureMinFilter::from_raw);
        assert_round_trip(TextureMagFilter::ALL, TextureMagFilter::to_raw, TextureMagFilter::from_raw);
        assert_round_trip(TextureWrap::ALL, TextureWrap::to_raw, TextureWrap::from_raw);
        assert_round_trip(
            TextureCompareMode::ALL,
            TextureCompareMode::to_raw,
            TextureCompareMode::from_raw,
        );
        assert_round_trip(CompareFunc::ALL, CompareFunc::to_raw, CompareFunc::from_raw);
        assert_round_trip(
            PixelStoreParameter::ALL,
            PixelStoreParameter::to_raw,
            PixelStoreParameter::from_raw,
        );
        assert_round_trip(BlendFactor::ALL, BlendFactor::to_raw, BlendFactor::from_raw);
        assert_round_trip(BlendEquation::ALL, BlendEquation::to_raw, BlendEquation::from_raw);
        assert_round_trip(Capability::ALL, Capability::to_raw, Capability::from_raw);
        assert_round_trip(Face::ALL, Face::to_raw, Face::from_raw);
        assert_round_trip(FrontFace::ALL, FrontFace::to_raw, FrontFace::from_raw);
        assert_round_trip(PolygonMode::ALL, PolygonMode::to_raw, PolygonMode::from_raw);
        assert_round_trip(StencilOp::ALL, StencilOp::to_raw, StencilOp::from_raw);
        assert_round_trip(FramebufferTarget::ALL, FramebufferTarget::to_raw, FramebufferTarget::from_raw);
        assert_round_trip(
            RenderbufferTarget::ALL,
            RenderbufferTarget::to_raw,
            RenderbufferTarget::from_raw,
        );
        assert_round_trip(FramebufferStatus::ALL, FramebufferStatus::to_raw, FramebufferStatus::from_raw);
        assert_round_trip(BlitFilter::ALL, BlitFilter::to_raw, BlitFilter::from_raw);
        assert_round_trip(StringName::ALL, StringName::to_raw, StringName::from_raw);
        assert_round_trip(IntegerName::ALL, IntegerName::to_raw, IntegerName::from_raw);
        assert_round_trip(IntegerVecName::ALL, IntegerVecName::to_raw, IntegerVecName::from_raw);
        assert_round_trip(FloatName::ALL, FloatName::to_raw, FloatName::from_raw);
        assert_round_trip(SyncCondition::ALL, SyncCondition::to_raw, SyncCondition::from_raw);
        assert_round_trip(WaitResult::ALL, WaitResult::to_raw, WaitResult::from_raw);
    }

    #[test]
    fn test_discriminant_is_the_gl_constant() {
        assert_eq!(BufferTarget::Array as u32, 0x8892);
        assert_eq!(BlendFactor::OneMinusSrcAlpha.to_raw(), 0x0303);
        assert_eq!(GLenum::from(Capability::DepthTest), 0x0B71);
    }

    #[test]
    fn test_unmapped_constants_are_rejected() {
        assert_eq!(BufferTarget::from_raw(ffi::TEXTURE_2D), None);
        assert_eq!(BlendFactor::try_from(0xDEAD), Err(0xDEAD));
    }

    #[test]
    fn test_attachment_points() {
        for attachment in [
            Attachment::Color(0),
            Attachment::Color(7),
            Attachment::Color(31),
            Attachment::Depth,
            Attachment::Stencil,
            Attachment::DepthStencil,
        ] {
            assert_eq!(Attachment::from_raw(attachment.to_raw()), Some(attachment));
        }
        assert_eq!(Attachment::Color(2).to_raw(), 0x8CE2);
        // One past the color range is GL_DEPTH_ATTACHMENT itself
        assert_eq!(Attachment::from_raw(ffi::COLOR_ATTACHMENT0 + 32), Some(Attachment::Depth));
        assert_eq!(Attachment::from_raw(ffi::COLOR_ATTACHMENT0 + 33), None);
        assert_eq!(Attachment::from_raw(ffi::TEXTURE_2D), None);
        assert_eq!(DrawBuffer::None.to_raw(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_color_attachment_bound() {
        Attachment::Color(COLOR_ATTACHMENT_COUNT).to_raw();
    }

    #[test]
    fn test_masks_keep_raw_bits() {
        assert_eq!((ClearMask::COLOR | ClearMask::DEPTH).bits(), 0x4100);
        assert_eq!(MapAccess::READ.bits() | MapAccess::WRITE.bits(), 0x3);
        assert_eq!(ShaderStages::all().bits(), 0x3F);
    }
}
