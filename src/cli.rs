use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::DataType;

/// Plot the waveform and power spectrum of an interleaved IQ capture.
#[derive(Parser, Debug)]
#[command(name = "iq-plot", version, about)]
pub struct Args {
    /// The binary (or text) file to read.
    pub file: PathBuf,

    /// Sample rate of the data contained in <FILE>, in Hz.
    #[arg(value_parser = parse_sample_rate)]
    pub samplerate: f64,

    /// Element data type of <FILE>.
    #[arg(short = 't', long = "type", value_enum, default_value = "str")]
    pub data_type: DataType,

    /// Clamp spectrum values below this level (dB) instead of keeping -inf.
    #[arg(long, allow_negative_numbers = true)]
    pub floor_db: Option<f64>,

    /// Also write the centred spectrum to this CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Compute (and export) without opening the plot window.
    #[arg(long)]
    pub no_window: bool,
}

fn parse_sample_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("sample rate must be a positive finite number, got {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_text() {
        let args = Args::try_parse_from(["iq-plot", "capture.txt", "48000"]).unwrap();
        assert_eq!(args.file, PathBuf::from("capture.txt"));
        assert_eq!(args.samplerate, 48_000.0);
        assert_eq!(args.data_type, DataType::Text);
        assert_eq!(args.floor_db, None);
        assert!(args.export.is_none());
        assert!(!args.no_window);
    }

    #[test]
    fn test_type_short_and_long() {
        let args = Args::try_parse_from(["iq-plot", "c.bin", "2e6", "-t", "int16"]).unwrap();
        assert_eq!(args.data_type, DataType::Int16);
        assert_eq!(args.samplerate, 2e6);

        let args = Args::try_parse_from(["iq-plot", "c.bin", "8", "--type", "int8"]).unwrap();
        assert_eq!(args.data_type, DataType::Int8);

        let args = Args::try_parse_from(["iq-plot", "c.bin", "8", "--type", "int32"]).unwrap();
        assert_eq!(args.data_type, DataType::Int32);
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = Args::try_parse_from(["iq-plot", "c.bin", "8", "-t", "float32"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        for bad in ["zero", "0", "inf", "nan"] {
            assert!(Args::try_parse_from(["iq-plot", "c.bin", bad]).is_err(), "{bad}");
        }
        assert!(Args::try_parse_from(["iq-plot", "c.bin"]).is_err());
    }

    #[test]
    fn test_optional_flags() {
        let args = Args::try_parse_from([
            "iq-plot",
            "c.bin",
            "8",
            "--floor-db",
            "-150",
            "--export",
            "out.csv",
            "--no-window",
        ])
        .unwrap();
        assert_eq!(args.floor_db, Some(-150.0));
        assert_eq!(args.export, Some(PathBuf::from("out.csv")));
        assert!(args.no_window);
    }
}
