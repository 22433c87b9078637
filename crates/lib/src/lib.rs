pub mod cli;
pub mod input;

pub use self::input::{FromInput, IStr, IStrError};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli;
    pub use crate::input::{IStr, Nl, Ws, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Read the input file backing a solution.
///
/// The contents are leaked so the returned processor can hand out
/// `&'static` slices of the raw input.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    use anyhow::{anyhow, Context};

    let data = std::fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    Ok(IStr::new(Vec::leak(data)))
}

/// Prepare an input processor for the given file under `inputs/`.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path)?, path)
    }};
}
