use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    let mut sources = Vec::new();
    for entry in glob::glob("csrc/*.[ch]").expect("csrc glob pattern is valid") {
        let path = entry.expect("failed to read csrc entry");
        println!("cargo:rerun-if-changed={}", path.display());
        if path.extension().map_or(false, |e| e == "c") {
            sources.push(path);
        }
    }
    cc::Build::new()
        .files(&sources)
        .include("csrc")
        .compile("fenv_shim");

    // fe* live in libm on glibc
    println!("cargo:rustc-link-lib=m");

    let bindings = bindgen::Builder::default()
        .header("csrc/fenv_shim.h")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks))
        .allowlist_function("fe[a-z]+")
        .allowlist_function("fenv_shim_.*")
        .allowlist_type("fenv_t")
        .allowlist_type("fexcept_t")
        .allowlist_type("fenv_shim_const")
        .prepend_enum_name(false)
        .generate()
        .expect("unable to generate bindings for <fenv.h>");

    let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    bindings
        .write_to_file(out.join("bindings.rs"))
        .expect("couldn't write bindings");
}
