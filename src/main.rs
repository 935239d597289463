use clap::{Parser, Subcommand};
use reframe::batch::{self, Operation};
use reframe::imaging::{JpegQuality, PngCompression, SaveOptions};
use reframe::output;
use std::path::PathBuf;

/// Input and output paths shared by every subcommand.
#[derive(clap::Args, Clone)]
struct IoArgs {
    /// Input image, or a directory to process recursively
    input: PathBuf,

    /// Output path; treated as a directory when INPUT is a directory
    output: PathBuf,
}

/// Encoding flags shared by every subcommand.
#[derive(clap::Args, Clone)]
struct SaveArgs {
    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 75)]
    jpeg_quality: u8,

    /// PNG compression level (0-9)
    #[arg(long, default_value_t = 5)]
    png_compression: u8,
}

impl SaveArgs {
    fn to_options(&self) -> SaveOptions {
        SaveOptions {
            jpeg_quality: JpegQuality::new(self.jpeg_quality),
            png_compression: PngCompression::new(self.png_compression),
            ..SaveOptions::default()
        }
    }
}

#[derive(Parser)]
#[command(name = "reframe")]
#[command(about = "Scale, crop, and center raster images")]
#[command(long_about = "\
Scale, crop, and center raster images

Reads JPEG and PNG, picks the codec from the file extension (both for
input and output), and writes the result where you point it. When INPUT
is a directory, every supported image under it is processed in parallel
and written under OUTPUT at the same relative path.

Operations:

  scale    multiply both dimensions by a factor (bilinear resampling)
  crop     keep at most WIDTHxHEIGHT from the top-left corner
  center   place the image centered on a transparent WIDTHxHEIGHT canvas
  convert  re-encode only; 'reframe convert in.png out.jpg' converts format

Examples:

  reframe scale --factor 0.5 photo.jpg half.jpg
  reframe crop --width 1200 --height 800 banner.png cropped.png
  reframe center --width 1080 --height 1080 logo.png square.png
  reframe convert --jpeg-quality 85 gallery/ gallery-jpeg/")]
#[command(version)]
struct Cli {
    /// Emit reports as JSON instead of human-readable lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scale the image by a factor (1.0 leaves it unchanged)
    Scale {
        /// Scale factor; 2.0 doubles both dimensions, 0.5 halves them
        #[arg(long)]
        factor: f64,
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Crop to at most the given size, keeping the top-left region
    Crop {
        /// Maximum output width in pixels
        #[arg(long)]
        width: u32,
        /// Maximum output height in pixels
        #[arg(long)]
        height: u32,
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Center the image on a transparent canvas of the given size
    Center {
        /// Canvas width in pixels
        #[arg(long)]
        width: u32,
        /// Canvas height in pixels
        #[arg(long)]
        height: u32,
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Re-encode without transforming; the output extension picks the format
    Convert {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (op, io, save) = match cli.command {
        Command::Scale { factor, io, save } => (Operation::Scale { factor }, io, save),
        Command::Crop {
            width,
            height,
            io,
            save,
        } => (Operation::Crop { width, height }, io, save),
        Command::Center {
            width,
            height,
            io,
            save,
        } => (Operation::Center { width, height }, io, save),
        Command::Convert { io, save } => (Operation::Convert, io, save),
    };

    let options = save.to_options();
    let reports = if io.input.is_dir() {
        batch::run(op, &io.input, &io.output, &options)?
    } else {
        vec![batch::apply_to_file(op, &io.input, &io.output, &options)?]
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        output::print_reports(&reports);
    }

    Ok(())
}
