//! Helper macro for the dispatch wrapper surface.
//!
//! Every wrapper is structurally identical: look up the address in the
//! symbol table, bind it to the statically-known calling signature,
//! invoke, forward the return value. `native_fn!` expands that shape per
//! entry point so the per-category files stay declarative.

/// Generate typed dispatch wrappers on `Z3Lib`.
///
/// # Usage
///
/// ```ignore
/// impl Z3Lib {
///     native_fn! {
///         /// Doc comment for the wrapper.
///         fn mk_true["Z3_mk_true"](ctx: Z3Context) -> Z3Ast;
///         fn del_context["Z3_del_context"](ctx: Z3Context);
///     }
/// }
/// ```
///
/// Each item expands to `pub unsafe fn` taking the listed arguments,
/// returning `Result<T, SymbolError>`. The signature must match the
/// native function's calling contract exactly; the cast is unchecked.
macro_rules! native_fn {
    (
        $(#[$meta:meta])*
        fn $method:ident[$symbol:literal]($($arg:ident : $ty:ty),* $(,)?) -> $ret:ty;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub unsafe fn $method(&self, $($arg: $ty),*) -> Result<$ret, $crate::error::SymbolError> {
            let addr = self.table.address($symbol)?;
            let func: unsafe extern "C" fn($($ty),*) -> $ret =
                unsafe { ::core::mem::transmute(addr) };
            Ok(unsafe { func($($arg),*) })
        }
        native_fn! { $($rest)* }
    };
    (
        $(#[$meta:meta])*
        fn $method:ident[$symbol:literal]($($arg:ident : $ty:ty),* $(,)?);
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub unsafe fn $method(&self, $($arg: $ty),*) -> Result<(), $crate::error::SymbolError> {
            let addr = self.table.address($symbol)?;
            let func: unsafe extern "C" fn($($ty),*) =
                unsafe { ::core::mem::transmute(addr) };
            unsafe { func($($arg),*) };
            Ok(())
        }
        native_fn! { $($rest)* }
    };
    () => {};
}
