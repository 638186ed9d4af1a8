use clap::{Parser, Subcommand};
use flipdeck::{config, convert};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flipdeck")]
#[command(about = "Turn a PDF into a password-gated flipbook HTML file")]
#[command(long_about = "\
Turn a PDF into a password-gated flipbook HTML file

The output is one self-contained .html: every page embedded as an image,
a drag-to-flip viewer, and a password prompt at open time. It needs no
server and no network — send the file, share the password.

The password is a deterrent for casual viewers, not encryption: it is
stored inside the file in plain text, along with all page images.

Rendering uses pdfium. Place the pdfium library next to the binary or
install it system-wide; without it, conversion fails up front.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a PDF into a flipbook artifact
    Convert {
        /// Source PDF
        input: PathBuf,

        /// Password the viewer must enter (empty allows empty input)
        #[arg(long, short, default_value = "")]
        password: String,

        /// Output path (default: <input stem>_flipbook.html next to the input)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Config file (default values are used when absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the page raster width in pixels
        #[arg(long)]
        width: Option<u32>,
    },
    /// Print a stock flipdeck.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input,
            password,
            output,
            config: config_path,
            width,
        } => {
            let mut viewer_config = match &config_path {
                Some(path) => config::ViewerConfig::load(path)?,
                None => config::ViewerConfig::default(),
            };
            if let Some(width) = width {
                viewer_config.target_width = width;
            }
            viewer_config.validate()?;

            println!("==> Rendering {}", input.display());
            let conversion = convert::convert(&input, &password, &viewer_config)?;
            println!(
                "==> {} pages rasterized at {}px",
                conversion.page_count, viewer_config.target_width
            );

            let out_path = output
                .unwrap_or_else(|| input.with_file_name(&conversion.file_name));
            std::fs::write(&out_path, &conversion.artifact)?;
            println!("==> Flipbook written to {}", out_path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
