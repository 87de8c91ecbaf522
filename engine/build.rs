fn main() {
    // write build time info
    built::write_built_file().expect("Failed to acquire build-time information");
}
