use std::env;
use std::fs;
use std::path::PathBuf;

// Copies the jar named by INSTALLER_JAR into OUT_DIR so main.rs can embed
// it with include_bytes!. Builds without one embed an empty payload.
fn main() {
    println!("cargo:rerun-if-env-changed=INSTALLER_JAR");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    let embedded = out_dir.join("installer-payload.bin");

    match env::var_os("INSTALLER_JAR") {
        Some(jar) => {
            let jar = PathBuf::from(jar);
            println!("cargo:rerun-if-changed={}", jar.display());
            fs::copy(&jar, &embedded).expect("failed to copy INSTALLER_JAR payload");
        }
        None => {
            fs::write(&embedded, []).expect("failed to write empty payload");
        }
    }
}
