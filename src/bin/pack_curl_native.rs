//! pack_curl_native - packs prebuilt curl and OpenSSL DLLs into Resources.zip.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match curlthin_build::cli::run_pack().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
