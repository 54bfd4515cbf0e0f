use tracing_subscriber::EnvFilter;

use shpcrs::core::discovery::SHAPEFILE_EXTENSION;
use shpcrs::io::ExtractError;
use shpcrs::{
    CrsInfo, Error, GdalResolver, ScanEvent, ScanParams, inspect_file, scan_directory_to_path,
};

use super::args::{CliArgs, Command, InspectArgs, ScanArgs};
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_crs(crs: &CrsInfo) {
    println!("CRS Name: {}", crs.name);
    println!("CRS WKT:");
    println!("{}", crs.wkt);
    match &crs.epsg_code {
        Some(code) => println!("EPSG Code Detected: {}", code),
        None => println!("Unable to resolve EPSG code."),
    }
}

/// Plural noun for files with `extension`, e.g. "shapefiles" or ".tab files"
fn files_label(extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.eq_ignore_ascii_case(SHAPEFILE_EXTENSION) {
        "shapefiles".to_string()
    } else {
        format!(".{} files", extension)
    }
}

fn print_progress(event: ScanEvent<'_>, label: &str) {
    match event {
        ScanEvent::Discovered { count } => println!("Found {} {}", count, label),
        ScanEvent::Processing { path } => println!("Processing: {}", path.display()),
        ScanEvent::Extracted { .. } => {}
        ScanEvent::Skipped { error } => match error {
            ExtractError::Open { path, source } => {
                println!("Error processing: {}: {}", path.display(), source)
            }
            ExtractError::NoCrs { path } => println!("No CRS found for: {}", path.display()),
        },
    }
}

fn run_inspect(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.ok_or(AppError::MissingArgument {
        arg: "<PATH>".to_string(),
    })?;

    match inspect_file(&path, &GdalResolver::new(), !args.no_full_scan) {
        Ok(crs) => print_crs(&crs),
        Err(Error::Extract(ExtractError::NoCrs { path })) => {
            println!("No CRS found for: {}", path.display());
            println!("CRS Name: unavailable");
            println!("CRS WKT: unavailable");
        }
        Err(e) => return Err(e.into()),
    }
    println!("\n---");
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.extension.trim_start_matches('.').is_empty() {
        return Err(AppError::InvalidExtension {
            extension: args.extension,
        }
        .into());
    }

    let label = files_label(&args.extension);
    let params = ScanParams {
        extension: args.extension,
        follow_links: args.follow_links,
        full_scan: !args.no_full_scan,
        format: args.format,
    };

    let result = scan_directory_to_path(
        &args.root,
        &args.output,
        &params,
        &GdalResolver::new(),
        |event| print_progress(event, &label),
    )?;

    tracing::info!(
        "Extracted: {}, skipped: {}",
        result.processed(),
        result.failed()
    );
    println!("CRS information written to {}", args.output.display());
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    match args.command {
        Command::Inspect(inspect) => run_inspect(inspect),
        Command::Scan(scan) => run_scan(scan),
    }
}
