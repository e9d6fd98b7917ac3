//! Probe the local GL driver through flick-gl
//!
//! Creates a headless EGL pbuffer context, loads the entry points either from
//! `eglGetProcAddress` or from libepoxy, and reports what the driver exposes.

use std::ffi::c_void;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use flick_gl::{
    log_debug_message, DebugSeverity, ErrorPolicy, FloatName, Gl, GlConfig, IntegerName, IntegerVecName,
    StringName,
};
use khronos_egl as egl;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Loader {
    /// Resolve through eglGetProcAddress
    Egl,
    /// Resolve through libepoxy
    Epoxy,
}

#[derive(Parser, Debug)]
#[command(name = "gl-probe")]
#[command(about = "Report what the local GL driver exposes", long_about = None)]
struct Args {
    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Where GL entry points come from
    #[arg(long, value_enum, default_value_t = Loader::Egl)]
    loader: Loader,

    /// TOML file with an `error_policy` key
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the error policy (log, assert, none)
    #[arg(long)]
    policy: Option<ErrorPolicy>,
}

#[derive(Debug, Serialize)]
struct Report {
    egl_version: (i32, i32),
    vendor: Option<String>,
    renderer: Option<String>,
    version: Option<String>,
    shading_language: Option<String>,
    context_version: (i32, i32),
    limits: Limits,
    extensions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Limits {
    max_texture_size: i32,
    max_renderbuffer_size: i32,
    max_viewport_dims: Vec<i32>,
    max_vertex_attribs: i32,
    max_texture_image_units: i32,
    max_combined_texture_image_units: i32,
    max_uniform_buffer_bindings: i32,
    max_draw_buffers: i32,
    max_color_attachments: i32,
    max_samples: i32,
    max_texture_lod_bias: f32,
}

/// A current headless context. Dropping it tears the context down.
struct Headless {
    egl: egl::DynamicInstance<egl::EGL1_4>,
    display: egl::Display,
    surface: egl::Surface,
    context: egl::Context,
    version: (i32, i32),
}

impl Headless {
    fn create() -> Result<Self> {
        let egl = unsafe { egl::DynamicInstance::<egl::EGL1_4>::load_required() }
            .map_err(|e| anyhow::anyhow!("Failed to load EGL: {:?}", e))?;

        let display = unsafe { egl.get_display(egl::DEFAULT_DISPLAY) }
            .ok_or_else(|| anyhow::anyhow!("Failed to get EGL display"))?;

        let version = egl
            .initialize(display)
            .map_err(|e| anyhow::anyhow!("Failed to initialize EGL: {:?}", e))?;
        info!("EGL initialized: {}.{}", version.0, version.1);

        egl.bind_api(egl::OPENGL_API)
            .map_err(|e| anyhow::anyhow!("Failed to bind the desktop GL API: {:?}", e))?;

        let config_attribs = [
            egl::RED_SIZE, 8,
            egl::GREEN_SIZE, 8,
            egl::BLUE_SIZE, 8,
            egl::ALPHA_SIZE, 8,
            egl::RENDERABLE_TYPE, egl::OPENGL_BIT,
            egl::SURFACE_TYPE, egl::PBUFFER_BIT,
            egl::NONE,
        ];
        let config = egl
            .choose_first_config(display, &config_attribs)
            .map_err(|e| anyhow::anyhow!("Failed to choose EGL config: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("No pbuffer-capable GL config found"))?;

        let context_attribs = [egl::NONE];
        let context = egl
            .create_context(display, config, None, &context_attribs)
            .map_err(|e| anyhow::anyhow!("Failed to create EGL context: {:?}", e))?;

        let surface_attribs = [egl::WIDTH, 16, egl::HEIGHT, 16, egl::NONE];
        let surface = egl
            .create_pbuffer_surface(display, config, &surface_attribs)
            .map_err(|e| anyhow::anyhow!("Failed to create pbuffer surface: {:?}", e))?;

        egl.make_current(display, Some(surface), Some(surface), Some(context))
            .map_err(|e| anyhow::anyhow!("Failed to make EGL context current: {:?}", e))?;
        debug!("Headless context current");

        Ok(Self {
            egl,
            display,
            surface,
            context,
            version,
        })
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        self.egl
            .get_proc_address(name)
            .map_or(std::ptr::null(), |f| f as *const c_void)
    }
}

impl Drop for Headless {
    fn drop(&mut self) {
        let _ = self.egl.make_current(self.display, None, None, None);
        if let Err(e) = self.egl.destroy_surface(self.display, self.surface) {
            warn!("Failed to destroy pbuffer surface: {:?}", e);
        }
        if let Err(e) = self.egl.destroy_context(self.display, self.context) {
            warn!("Failed to destroy EGL context: {:?}", e);
        }
        let _ = self.egl.terminate(self.display);
    }
}

fn probe(gl: &Gl, egl_version: (i32, i32)) -> Report {
    let limits = Limits {
        max_texture_size: gl.get_integer(IntegerName::MaxTextureSize),
        max_renderbuffer_size: gl.get_integer(IntegerName::MaxRenderbufferSize),
        max_viewport_dims: gl.get_integer_v(IntegerVecName::MaxViewportDims),
        max_vertex_attribs: gl.get_integer(IntegerName::MaxVertexAttribs),
        max_texture_image_units: gl.get_integer(IntegerName::MaxTextureImageUnits),
        max_combined_texture_image_units: gl.get_integer(IntegerName::MaxCombinedTextureImageUnits),
        max_uniform_buffer_bindings: gl.get_integer(IntegerName::MaxUniformBufferBindings),
        max_draw_buffers: gl.get_integer(IntegerName::MaxDrawBuffers),
        max_color_attachments: gl.get_integer(IntegerName::MaxColorAttachments),
        max_samples: gl.get_integer(IntegerName::MaxSamples),
        max_texture_lod_bias: gl.get_float(FloatName::MaxTextureLodBias),
    };

    let mut extensions: Vec<String> = gl.extensions().collect();
    extensions.sort();

    Report {
        egl_version,
        vendor: gl.get_string(StringName::Vendor),
        renderer: gl.get_string(StringName::Renderer),
        version: gl.get_string(StringName::Version),
        shading_language: gl.get_string(StringName::ShadingLanguageVersion),
        context_version: gl.version(),
        limits,
        extensions,
    }
}

fn print_text(report: &Report) {
    let unknown = || "(unknown)".to_string();
    println!("=== GL Probe ===\n");
    println!("EGL:          {}.{}", report.egl_version.0, report.egl_version.1);
    println!("Vendor:       {}", report.vendor.clone().unwrap_or_else(unknown));
    println!("Renderer:     {}", report.renderer.clone().unwrap_or_else(unknown));
    println!("Version:      {}", report.version.clone().unwrap_or_else(unknown));
    println!("GLSL:         {}", report.shading_language.clone().unwrap_or_else(unknown));
    println!("Context:      {}.{}", report.context_version.0, report.context_version.1);

    let limits = &report.limits;
    println!("\n--- Limits ---");
    println!("  Max texture size:        {}", limits.max_texture_size);
    println!("  Max renderbuffer size:   {}", limits.max_renderbuffer_size);
    println!("  Max viewport dims:       {:?}", limits.max_viewport_dims);
    println!("  Max vertex attribs:      {}", limits.max_vertex_attribs);
    println!("  Max texture units:       {}", limits.max_texture_image_units);
    println!("  Max combined units:      {}", limits.max_combined_texture_image_units);
    println!("  Max UBO bindings:        {}", limits.max_uniform_buffer_bindings);
    println!("  Max draw buffers:        {}", limits.max_draw_buffers);
    println!("  Max color attachments:   {}", limits.max_color_attachments);
    println!("  Max samples:             {}", limits.max_samples);
    println!("  Max texture LOD bias:    {}", limits.max_texture_lod_bias);

    println!("\n--- Extensions ({}) ---", report.extensions.len());
    for extension in &report.extensions {
        println!("  {}", extension);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "debug,flick_gl=debug"
    } else {
        "warn,flick_gl=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    let mut config = GlConfig::resolve(args.config.as_deref())?;
    if let Some(policy) = args.policy {
        config.error_policy = policy;
    }

    let headless = Headless::create()?;

    // SAFETY: the headless context stays current until `headless` drops,
    // which happens after `gl` goes out of scope.
    let gl = match args.loader {
        Loader::Egl => unsafe {
            Gl::load_with(&config, |name| match name.to_str() {
                Ok(name) => headless.proc_address(name),
                Err(_) => std::ptr::null(),
            })
        },
        Loader::Epoxy => unsafe { Gl::load_epoxy(&config)? },
    };

    if gl.is_loaded("glDebugMessageCallback") {
        gl.debug_message_callback(log_debug_message);
        gl.debug_message_control(None, None, Some(DebugSeverity::Notification), &[], args.debug);
    }

    let report = probe(&gl, headless.version);
    drop(gl);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    Ok(())
}
