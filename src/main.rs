//! pi_hal - Raspberry Pi Hardware Abstraction Binary
//!
//! A standalone binary for inspecting platform telemetry and exercising the
//! pin controller from the command line.

use clap::{Args, Parser, Subcommand};
use pi_hal::{platform, HardwareSnapshot, PinController, SimulatedPin, DEFAULT_BLINK_PERIOD_MS};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "pi_hal")]
#[command(about = "Raspberry Pi hardware abstraction layer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Pin control and system telemetry for Raspberry Pi, \
with a host-simulated fallback for development machines")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show platform classification and current metric readings (default)
    Info,

    /// Capture a single metric snapshot and exit
    Snapshot(SnapshotArgs),

    /// Blink a pin and exit
    Blink(BlinkArgs),
}

#[derive(Args)]
struct SnapshotArgs {
    /// Output format: json or pretty
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

#[derive(Args)]
struct BlinkArgs {
    /// Pin index to blink
    #[arg(long, default_value_t = 18)]
    pin: u8,

    /// Sleep between toggles, in milliseconds
    #[arg(long, default_value_t = DEFAULT_BLINK_PERIOD_MS)]
    period: u32,

    /// Number of full on/off cycles
    #[arg(long, default_value_t = 3)]
    cycles: u32,

    /// Drive the real pin instead of the simulated backend
    #[cfg(feature = "gpio")]
    #[arg(long)]
    hardware: bool,

    /// Hardware PWM channel to claim alongside the pin
    #[cfg(feature = "gpio")]
    #[arg(long, default_value_t = 0)]
    pwm_channel: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    match cli.command.unwrap_or(Commands::Info) {
        Commands::Info => info_command(),
        Commands::Snapshot(args) => snapshot_command(&args),
        Commands::Blink(args) => blink_command(&args),
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pi_hal={}", level)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn info_command() -> anyhow::Result<()> {
    println!("Platform: {:?}", platform::current());
    if let Some(model) = platform::model() {
        println!("Model:    {}", model);
    }

    let snapshot = HardwareSnapshot::capture();
    println!();
    println!("CPU memory:      {:.1} MB", snapshot.cpu.memory_mb);
    println!("CPU temperature: {:.1} C", snapshot.cpu.temp_celsius);
    println!("CPU utilization: {:.1} %", snapshot.cpu.utilization_percent);
    println!("GPU memory:      {:.1} MB", snapshot.gpu.memory_mb);
    println!("GPU temperature: {:.1} C", snapshot.gpu.temp_celsius);
    println!("Used RAM:        {:.1} MB", snapshot.ram.used_mb);

    if !snapshot.platform_supported {
        println!();
        println!("(unsupported host: readings are sentinels)");
    }
    Ok(())
}

fn snapshot_command(args: &SnapshotArgs) -> anyhow::Result<()> {
    let snapshot = HardwareSnapshot::capture();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string(&snapshot)?),
        _ => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}

fn blink_command(args: &BlinkArgs) -> anyhow::Result<()> {
    #[cfg(feature = "gpio")]
    if args.hardware {
        let mut pin =
            pi_hal::HardwarePin::new(args.pin, args.pwm_channel, pi_hal::DEFAULT_PWM_RANGE)?;
        info!(pin = args.pin, "blinking hardware pin");
        pin.blink(args.period, args.cycles);
        pin.shutdown();
        return Ok(());
    }

    let mut pin = SimulatedPin::new(args.pin);
    info!(pin = args.pin, "blinking simulated pin");
    pin.blink(args.period, args.cycles);
    pin.shutdown();
    Ok(())
}
