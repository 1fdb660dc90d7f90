/// Re-exports each listed crate both as a module and by its items, so that
/// documentation of the facade shows the items in place.
///
/// ```ignore
/// inner::doc_inline_reexport! { inversion, }
/// // expands to
/// #[doc(inline)]
/// pub use inversion::{self, *};
/// ```
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident,)* ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
