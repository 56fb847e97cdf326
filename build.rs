use std::env;
use std::fs;
use std::path::Path;

#[path = "src/logos.rs"]
#[allow(dead_code)]
mod logos;

fn main() {
    println!("cargo:rerun-if-changed=public/clients");

    let names = fs::read_dir("public/clients")
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let logos = logos::sort_client_logos(names);

    let body = logos
        .iter()
        .map(|name| format!("    {:?},\n", name))
        .collect::<String>();
    let source = format!("pub const CLIENT_LOGOS: &[&str] = &[\n{}];\n", body);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(Path::new(&out_dir).join("client_logos.rs"), source).expect("write client_logos.rs");
}
