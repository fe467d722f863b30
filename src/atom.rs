/// Trait for the atomic elements an input slice is made of
///
/// Parsers are generic over their element type: bytes, characters, or any
/// other small copyable token. The render hooks feed error messages, so a
/// mismatch can show what was expected and what was found.
pub trait Atom: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Render a single element for error reporting
    fn render(&self) -> String {
        format!("{:?}", self)
    }

    /// Render a slice of elements for error reporting
    fn render_slice(slice: &[Self]) -> String;
}

impl Atom for u8 {
    fn render(&self) -> String {
        format!(
            "0x{:02X} ('{}')",
            self,
            std::str::from_utf8(&[*self]).unwrap_or("<non-utf8>")
        )
    }

    fn render_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atom for char {
    fn render(&self) -> String {
        format!("'{}'", self)
    }

    fn render_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atom for u32 {
    fn render(&self) -> String {
        format!("{}", self)
    }

    fn render_slice(slice: &[Self]) -> String {
        let rendered: Vec<String> = slice.iter().map(|e| e.to_string()).collect();
        rendered.join(" ")
    }
}
