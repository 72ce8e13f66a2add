//! Built-in sort constructors.

use super::Z3Lib;
use crate::types::{Z3Context, Z3Sort};

impl Z3Lib {
    native_fn! {
        fn mk_bool_sort["Z3_mk_bool_sort"](ctx: Z3Context) -> Z3Sort;

        fn mk_int_sort["Z3_mk_int_sort"](ctx: Z3Context) -> Z3Sort;

        fn mk_real_sort["Z3_mk_real_sort"](ctx: Z3Context) -> Z3Sort;
    }
}
