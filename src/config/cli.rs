use crate::domain::model::BirthInput;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "chiron-oracle")]
#[command(about = "Compute a Chiron wound inversion reading from birth data")]
pub struct CliConfig {
    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub month: u32,

    #[arg(long)]
    pub day: u32,

    /// Local hour of birth, fractional (14.5 = 14:30)
    #[arg(long)]
    pub hour: f64,

    /// Birth latitude in degrees, south negative
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Birth longitude in degrees, west negative
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// IANA timezone name, e.g. Asia/Kolkata
    #[arg(long)]
    pub timezone: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the reading as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn birth_input(&self) -> BirthInput {
        BirthInput {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            latitude: self.lat,
            longitude: self.lon,
            timezone: self.timezone.clone(),
        }
    }
}
