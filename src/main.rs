use android_lib_replace::adb::AdbShell;
use android_lib_replace::console::StdinPrompt;
use android_lib_replace::session::{self, SessionConfig};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    for arg in env::args().skip(1) {
        if arg == "--help" || arg == "-h" {
            print_help();
            return ExitCode::SUCCESS;
        } else if arg == "--version" || arg == "-v" {
            println!(
                "Android Lib Replace v{} (build {})",
                env!("APP_VERSION_DISPLAY"),
                env!("APP_BUILD_YEAR")
            );
            return ExitCode::SUCCESS;
        } else {
            eprintln!("❌ Unknown argument: {arg}");
            print_help();
            return ExitCode::FAILURE;
        }
    }

    let bridge = match AdbShell::new() {
        Ok(bridge) => bridge,
        Err(e) => {
            println!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut prompt = StdinPrompt;

    match session::run(&bridge, &mut prompt, &SessionConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("🤖 Android Library Replacement Tool");
    println!();
    println!("Replaces shared libraries on a rooted Android device over ADB.");
    println!("Drop replacement files into the Replace/ folder next to the binary;");
    println!("the current on-device copies are saved under Backup/ first.");
    println!();
    println!("USAGE:");
    println!("    android-lib-replace [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)          Run the interactive replacement workflow");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("REQUIREMENTS:");
    println!("    'adb' in PATH, one attached device with root (su) access.");
    println!("    Set RUST_LOG=debug for command-level tracing.");
}
