use std::path::PathBuf;

use anyhow::Context as _;
use chaosfx::{
    AmbientRng, ChaosLock, ChaosSession, EffectParams, MAX_DIM, Mulberry32, PixelBuffer, Preset,
    chaos_shuffle, fit_within, gacha_roll, reactor_shuffle,
};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "chaosfx", version)]
struct Cli {
    /// Log more (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the effects pipeline over a PNG.
    Apply(ApplyArgs),
    /// Roll random knobs and print them as JSON.
    Shuffle(ShuffleArgs),
    /// List the built-in presets.
    Presets,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Effect parameters JSON. Missing knobs stay at identity.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Preset applied on top of `--params`.
    #[arg(long)]
    preset: Option<Preset>,

    /// Lock chaos to this seed (0 picks one and logs it).
    #[arg(long)]
    seed: Option<u32>,

    /// Roll the chaos shuffle before applying knob overrides.
    #[arg(long)]
    chaos: bool,

    /// Longest side of the working surface.
    #[arg(long, default_value_t = MAX_DIM)]
    max_dim: u32,

    /// Print the SHA-256 of the output RGBA bytes.
    #[arg(long)]
    digest: bool,

    #[command(flatten)]
    knobs: KnobArgs,
}

/// Individual knob overrides, applied last.
#[derive(Args, Debug, Default)]
struct KnobArgs {
    /// Hue rotation in degrees.
    #[arg(long, allow_negative_numbers = true)]
    hue: Option<f64>,
    /// Noise amplitude (0-100).
    #[arg(long)]
    noise: Option<f64>,
    /// Pixelation block size.
    #[arg(long)]
    pixel: Option<u32>,
    /// Posterize level count.
    #[arg(long)]
    posterize: Option<u32>,
    /// Swirl strength (0-100).
    #[arg(long)]
    swirl: Option<f64>,
    /// Kaleidoscope segments.
    #[arg(long)]
    kaleido: Option<u32>,
    /// Glitch intensity (0-100).
    #[arg(long)]
    glitch: Option<f64>,
    /// Contrast (-100..100).
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f64>,
    /// Brightness (-100..100).
    #[arg(long, allow_negative_numbers = true)]
    brightness: Option<f64>,
    /// Enable ordered dithering.
    #[arg(long)]
    dither: bool,
    /// Enable inversion.
    #[arg(long)]
    invert: bool,
}

impl KnobArgs {
    fn apply(&self, p: &mut EffectParams) {
        if let Some(v) = self.hue {
            p.hue_degrees = v;
        }
        if let Some(v) = self.noise {
            p.noise = v;
        }
        if let Some(v) = self.pixel {
            p.pixel_size = v;
        }
        if let Some(v) = self.posterize {
            p.posterize_levels = v;
        }
        if let Some(v) = self.swirl {
            p.swirl = v;
        }
        if let Some(v) = self.kaleido {
            p.kaleidoscope_segments = v;
        }
        if let Some(v) = self.glitch {
            p.glitch = v;
        }
        if let Some(v) = self.contrast {
            p.contrast = v;
        }
        if let Some(v) = self.brightness {
            p.brightness = v;
        }
        p.dither |= self.dither;
        p.invert |= self.invert;
    }
}

#[derive(Parser, Debug)]
struct ShuffleArgs {
    /// Seed for a reproducible roll; random when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Which button to press.
    #[arg(long, value_enum, default_value_t = ShuffleMode::Chaos)]
    mode: ShuffleMode,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShuffleMode {
    Chaos,
    Reactor,
    Gacha,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Shuffle(args) => cmd_shuffle(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let mut params = match &args.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read params '{}'", path.display()))?;
            EffectParams::from_json_str(&text)
                .with_context(|| format!("parse params '{}'", path.display()))?
        }
        None => EffectParams::default(),
    };
    if let Some(preset) = args.preset {
        preset.apply(&mut params);
    }

    let lock = args.seed.map_or_else(ChaosLock::unlocked, ChaosLock::locked);
    let mut session = ChaosSession::new(params, lock);
    tracing::debug!(?lock, resolved = ?session.lock(), "session ready");
    if session.lock().locked {
        eprintln!("chaos seed {}", session.lock().seed);
    }
    if args.chaos {
        session.chaos();
    }
    args.knobs.apply(session.params_mut());
    session.params().validate().context("effect parameters")?;

    let img = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (w, h) = fit_within(img.width(), img.height(), args.max_dim);
    let img = if (w, h) == img.dimensions() {
        img
    } else {
        image::imageops::resize(&img, w, h, image::imageops::FilterType::Triangle)
    };
    let src = PixelBuffer::from(img);

    let out = session.render(&src);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        out.as_bytes(),
        out.width(),
        out.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.digest {
        println!("{}", sha256_hex(out.as_bytes()));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_shuffle(args: ShuffleArgs) -> anyhow::Result<()> {
    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            ChaosLock::locked(0)
                .resolve_seed(&mut AmbientRng::new())
                .seed
        }
    };
    let mut rng = Mulberry32::new(seed);
    let mut params = EffectParams::default();
    match args.mode {
        ShuffleMode::Chaos => chaos_shuffle(&mut params, &mut rng),
        ShuffleMode::Reactor => reactor_shuffle(&mut params, &mut rng),
        ShuffleMode::Gacha => {
            let roll = gacha_roll(&mut params, &mut rng);
            eprintln!("gacha: {roll:?}");
        }
    }
    eprintln!("chaos seed {seed}");
    println!("{}", params.to_json_string()?);
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in Preset::ALL {
        let json = serde_json::to_string(&preset.params()).context("serialize preset")?;
        println!("{preset}\t{json}");
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
