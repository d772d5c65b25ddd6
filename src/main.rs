#[cfg(target_arch = "wasm32")]
pub fn main() {
    accesso::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
