mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use overprint_venn::{ContainerSession, DiagramOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "venn", about = "Overprint Venn diagram generator", version)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write overprint_off.pdf and overprint_on.pdf
    Generate {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Write a single diagram variant
    Render {
        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Enable overprint for the second disk
        #[arg(long)]
        overprint: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the content stream of a variant
    Stream {
        /// Enable overprint for the second disk
        #[arg(long)]
        overprint: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show layout statistics
    Stats {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Write the default options as JSON
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Options file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Paper size (overrides the config file)
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Orientation (overrides the config file)
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for overprint_venn::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for overprint_venn::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl PageArgs {
    async fn resolve(&self) -> Result<DiagramOptions> {
        let mut options = match &self.config {
            Some(path) => DiagramOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => DiagramOptions::default(),
        };
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::StderrLogger::new(logger::level_from_flags(cli.verbose, cli.quiet))
        .init()
        .context("installing logger")?;

    match cli.command {
        Commands::Generate { out_dir, page } => {
            let options = page.resolve().await?;
            let _session = ContainerSession::initialize();

            let (off, on) = overprint_venn::write_variants(&options, &out_dir).await?;
            println!("Overprint off → {}", off.display());
            println!("Overprint on  → {}", on.display());
        }

        Commands::Render {
            output,
            overprint,
            page,
        } => {
            let options = page.resolve().await?;
            let _session = ContainerSession::initialize();

            overprint_venn::write_diagram(&options, overprint, &output).await?;
            println!("Generated → {}", output.display());
        }

        Commands::Stream { overprint, page } => {
            let options = page.resolve().await?;
            let diagram = overprint_venn::build_diagram_with(&options, overprint)?;
            print!("{}", diagram.content);
        }

        Commands::Stats { page } => {
            let options = page.resolve().await?;
            let diagram = overprint_venn::build_diagram_with(&options, false)?;
            let stats = overprint_venn::calculate_statistics(&diagram);

            println!("Diagram Statistics:");
            println!(
                "  Page: {:.2} x {:.2} pt ({:.1} x {:.1} mm)",
                stats.page_width_pt, stats.page_height_pt, stats.page_width_mm, stats.page_height_mm
            );
            println!("  Disk radius: {:.4} pt", stats.radius_pt);
            println!("  Center distance: {:.4} pt", stats.center_distance_pt);
            println!("  Overlap width: {:.4} pt", stats.overlap_width_pt);
            println!(
                "  Overlap area: {:.2} pt² ({:.1}% of a disk)",
                stats.overlap_area_pt2,
                stats.overlap_ratio * 100.0
            );
            println!(
                "  Content stream: {} bytes, {} operators",
                stats.content_bytes, stats.operator_count
            );
            if !diagram.layout.disks_within_page() {
                log::warn!("Disks extend past the page edge");
            }
        }

        Commands::InitConfig { output } => {
            DiagramOptions::default().save(&output).await?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
