mod args;
mod color;
mod qr;
mod scan;

use args::{Cli, Command, GenerateArgs, ScanArgs};
use clap::{CommandFactory, Parser};
use qr::QrRequest;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Scan(args)) => scan(args),
        None => {
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
    }
}

fn generate(args: GenerateArgs) -> ExitCode {
    let request = QrRequest {
        data: args.data,
        error_correction: args::ec_level_from_code(&args.error_correction),
        box_size: args.box_size,
        border: args.border,
        fill_color: args.fill_color,
        back_color: args.back_color,
        output_path: args.output,
    };

    println!("Generating QR code for: {}", request.data);

    match qr::write_qr_image(&request) {
        Ok(()) => {
            println!("Saved to: {}", request.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn scan(args: ScanArgs) -> ExitCode {
    if !args.image.exists() {
        eprintln!("Error: image '{}' does not exist", args.image.display());
        return ExitCode::FAILURE;
    }

    let decoded = match scan::scan_image(&args.image) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("Error while scanning: {e:#}");
            Vec::new()
        }
    };

    if decoded.is_empty() {
        println!("No QR codes found in '{}'", args.image.display());
    } else {
        println!(
            "Found {} QR code(s) in '{}':",
            decoded.len(),
            args.image.display()
        );
        for (index, data) in decoded.iter().enumerate() {
            println!("  {}. {}", index + 1, data);
        }
    }

    ExitCode::SUCCESS
}
