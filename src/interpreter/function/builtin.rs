use crate::{interpreter::function::core::Builtin, util::num};

/// Defines the builtin function table.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a signature shown by the `functions` command,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table registered into every
/// new session.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                signature: $signature:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every builtin function, in registration order.
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, signature: $signature, operation: $func },
            )*
        ];
    };
}

builtin_functions! {
    "abs"       => { arity: 1, signature: "abs(a)",             func: |a| a[0].abs() },
    "acos"      => { arity: 1, signature: "acos(a)",            func: |a| a[0].acos() },
    "asin"      => { arity: 1, signature: "asin(a)",            func: |a| a[0].asin() },
    "atan"      => { arity: 1, signature: "atan(a)",            func: |a| a[0].atan() },
    "cbrt"      => { arity: 1, signature: "cbrt(a)",            func: |a| a[0].cbrt() },
    "ceil"      => { arity: 1, signature: "ceil(a)",            func: |a| a[0].ceil() },
    "cos"       => { arity: 1, signature: "cos(a)",             func: |a| a[0].cos() },
    "cosh"      => { arity: 1, signature: "cosh(a)",            func: |a| a[0].cosh() },
    "exp"       => { arity: 1, signature: "exp(a)",             func: |a| a[0].exp() },
    "floor"     => { arity: 1, signature: "floor(a)",           func: |a| a[0].floor() },
    "log"       => { arity: 1, signature: "log(number)",        func: |a| a[0].ln() },
    "log"       => { arity: 2, signature: "log(number,base)",   func: |a| num::log_base(a[0], a[1]) },
    "max"       => { arity: 2, signature: "max(a,b)",           func: |a| a[0].max(a[1]) },
    "min"       => { arity: 2, signature: "min(a,b)",           func: |a| a[0].min(a[1]) },
    "pow"       => { arity: 2, signature: "pow(a,b)",           func: |a| a[0].powf(a[1]) },
    "random"    => { arity: 0, signature: "random()",           func: |_| rand::random::<f64>() },
    "rint"      => { arity: 1, signature: "rint(a)",            func: |a| a[0].round_ties_even() },
    "root"      => { arity: 2, signature: "root(a,b)",          func: |a| (a[0].ln() / a[1]).exp() },
    "round"     => { arity: 1, signature: "round(a)",           func: |a| num::round_half_up(a[0]) },
    "round"     => { arity: 2, signature: "round(a,decimals)",  func: |a| num::round_to_decimals(a[0], a[1]) },
    "signum"    => { arity: 1, signature: "signum(a)",          func: |a| num::signum(a[0]) },
    "sin"       => { arity: 1, signature: "sin(a)",             func: |a| a[0].sin() },
    "sinh"      => { arity: 1, signature: "sinh(a)",            func: |a| a[0].sinh() },
    "sqrt"      => { arity: 1, signature: "sqrt(a)",            func: |a| a[0].sqrt() },
    "tan"       => { arity: 1, signature: "tan(a)",             func: |a| a[0].tan() },
    "tanh"      => { arity: 1, signature: "tanh(a)",            func: |a| a[0].tanh() },
    "toDegrees" => { arity: 1, signature: "toDegrees(radians)", func: |a| a[0].to_degrees() },
    "toRadians" => { arity: 1, signature: "toRadians(degrees)", func: |a| a[0].to_radians() },
}
