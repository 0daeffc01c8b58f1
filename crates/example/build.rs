use navtarget_codegen::CodeGenerator;

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    let mut generator = CodeGenerator::new();
    generator
        .add_module_file("src/screens.rs", "crate::screens")
        .expect("scan src/screens.rs");
    generator.write_to_dir(&out_dir).expect("write generated containers");

    for diagnostic in generator.diagnostics() {
        println!("cargo:warning={diagnostic}");
    }
    println!("cargo:rerun-if-changed=src/screens.rs");
}
