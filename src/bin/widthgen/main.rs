mod error;
mod fetch;
mod logger;

use self::error::*;
use self::fetch::*;
use self::logger::*;

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fs_err::File;
use log::LevelFilter;
use widthgen::codegen::WidthTables;

const EAST_ASIAN_WIDTH_URL: &str =
    "https://www.unicode.org/Public/UCD/latest/ucd/EastAsianWidth.txt";
const EMOJI_VARIATION_SEQUENCES_URL: &str =
    "https://www.unicode.org/Public/UCD/latest/ucd/emoji/emoji-variation-sequences.txt";

#[derive(Parser)]
struct Args {
    /// Output file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "unicode_width_data.rs"
    )]
    output: PathBuf,
    /// East Asian Width property data URL.
    #[arg(long = "east-asian-width-url", value_name = "URL", default_value = EAST_ASIAN_WIDTH_URL)]
    east_asian_width_url: String,
    /// Emoji variation sequences data URL.
    #[arg(
        long = "emoji-variation-sequences-url",
        value_name = "URL",
        default_value = EMOJI_VARIATION_SEQUENCES_URL
    )]
    emoji_variation_sequences_url: String,
    /// Print debug messages.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    match do_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn do_main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let max_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Logger::init(max_level).map_err(Error::Logger)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let _guard = rt.enter();
    let (east_asian_width, emoji_variation_sequences) = rt.block_on(async {
        let client = reqwest::Client::builder().build()?;
        tokio::try_join!(
            fetch_text(&client, &args.east_asian_width_url),
            fetch_text(&client, &args.emoji_variation_sequences_url),
        )
    })?;
    let tables = WidthTables::new(&east_asian_width, &emoji_variation_sequences)?;
    write_output(&args.output, &tables)?;
    println!(
        "Wrote {} with {} east asian wide ranges and {} emoji vs16 base ranges",
        args.output.display(),
        tables.east_asian_wide.len(),
        tables.emoji_vs16_base.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn write_output(path: &Path, tables: &WidthTables) -> Result<(), Error> {
    let temporary_path = to_temporary_path(path);
    let mut file = File::create(&temporary_path)?;
    file.write_all(tables.to_string().as_bytes())?;
    file.flush()?;
    drop(file);
    fs_err::rename(&temporary_path, path)?;
    Ok(())
}

fn to_temporary_path(file: &Path) -> PathBuf {
    let mut new_file = file.parent().map(|p| p.to_path_buf()).unwrap_or_default();
    let file_name = file.file_name().unwrap_or_default();
    let mut new_file_name = OsString::new();
    new_file_name.push(".");
    new_file_name.push(file_name);
    new_file_name.push(".tmp");
    new_file.push(new_file_name);
    new_file
}
