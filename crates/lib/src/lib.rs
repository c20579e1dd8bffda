pub mod cli;
pub mod env;
pub mod input;
pub mod scan;
pub mod window;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::Opts;
    pub use crate::input::{ErrorKind, IStr, IStrError, Split, W};
    pub use crate::window::{Rows, Window};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use macros::entry;
}

/// Helper macro to implement [FromInput][crate::input::FromInput] for a type
/// by first parsing some other type.
///
/// Errors raised in the block are reported with the span of the input that
/// was consumed.
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(
                            span,
                            $crate::input::ErrorKind::Custom(e),
                        ))
                    }
                }
            }
        }
    };
}
