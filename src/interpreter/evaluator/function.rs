use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Defines the builtin function whitelist.
///
/// Each entry provides:
/// - an enum variant name,
/// - the list of source-level names that resolve to it (the first name is
///   canonical and used in error messages),
/// - the `f64` function implementing it.
///
/// The macro produces the [`Function`] enum and its `from_name`, `name` and
/// `func` methods, so the whitelist is stated exactly once. There is no
/// runtime lookup table: the parser resolves names through [`Function::from_name`],
/// and an AST can only hold functions that exist.
macro_rules! builtin_functions {
    (
        $(
            $variant:ident => {
                names: [$canonical:literal $(, $alias:literal)*],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin function of the expression language, resolved from its
        /// source-level name at parse time.
        ///
        /// The set is fixed to elementary single-argument functions over
        /// `f64`. Some functions carry an alias (for example `arcsin` for
        /// `asin`) so the numpy-style spellings keep working.
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub enum Function {
            $(
                #[doc = concat!("The `", $canonical, "` function.")]
                $variant,
            )*
        }

        impl Function {
            /// Resolves a source-level name to its builtin function.
            ///
            /// Returns `None` when the name is not in the whitelist; the
            /// parser turns that into an unknown-identifier error.
            ///
            /// # Example
            /// ```
            /// use quadra::interpreter::evaluator::function::Function;
            ///
            /// let function = Function::from_name("arcsin").unwrap();
            ///
            /// assert_eq!(function, Function::Asin);
            /// assert!(Function::from_name("system").is_none());
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $canonical $(| $alias)* => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Gets the canonical name of the function, as used in error
            /// messages.
            ///
            /// # Example
            /// ```
            /// use quadra::interpreter::evaluator::function::Function;
            ///
            /// assert_eq!(Function::from_name("ln").unwrap().name(), "log");
            /// ```
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $canonical, )*
                }
            }

            /// Gets the `f64` implementation of the function.
            fn func(self) -> fn(f64) -> f64 {
                match self {
                    $( Self::$variant => $func, )*
                }
            }
        }
    };
}

builtin_functions! {
    Sin     => { names: ["sin"],             func: f64::sin },
    Cos     => { names: ["cos"],             func: f64::cos },
    Tan     => { names: ["tan"],             func: f64::tan },
    Asin    => { names: ["asin", "arcsin"],  func: f64::asin },
    Acos    => { names: ["acos", "arccos"],  func: f64::acos },
    Atan    => { names: ["atan", "arctan"],  func: f64::atan },
    Sinh    => { names: ["sinh"],            func: f64::sinh },
    Cosh    => { names: ["cosh"],            func: f64::cosh },
    Tanh    => { names: ["tanh"],            func: f64::tanh },
    Exp     => { names: ["exp"],             func: f64::exp },
    Log     => { names: ["log", "ln"],       func: f64::ln },
    Log2    => { names: ["log2"],            func: f64::log2 },
    Log10   => { names: ["log10"],           func: f64::log10 },
    Sqrt    => { names: ["sqrt"],            func: f64::sqrt },
    Cbrt    => { names: ["cbrt"],            func: f64::cbrt },
    Abs     => { names: ["abs", "absolute"], func: f64::abs },
    Floor   => { names: ["floor"],           func: f64::floor },
    Ceil    => { names: ["ceil"],            func: f64::ceil },
    Round   => { names: ["round"],           func: f64::round },
    Radians => { names: ["radians"],         func: f64::to_radians },
    Degrees => { names: ["degrees"],         func: f64::to_degrees },
}

impl Function {
    /// Applies the function to an evaluated argument.
    ///
    /// The argument is finite (evaluation checks every intermediate value),
    /// so a non-finite output means the argument was outside the function's
    /// domain (`sqrt(-4)`, `log(0)`) or the result overflowed (`exp(1000)`).
    /// Both cases are reported as [`EvalError::FunctionDomain`] instead of
    /// letting NaN or infinity propagate into a quadrature sum.
    ///
    /// # Parameters
    /// - `argument`: The evaluated argument value.
    /// - `column`: Source column of the call, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use quadra::interpreter::evaluator::function::Function;
    ///
    /// let sqrt = Function::from_name("sqrt").unwrap();
    ///
    /// assert_eq!(sqrt.apply(9.0, 1).unwrap(), 3.0);
    /// assert!(sqrt.apply(-9.0, 1).is_err());
    /// ```
    pub fn apply(self, argument: f64, column: usize) -> EvalResult<f64> {
        let result = (self.func())(argument);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::FunctionDomain { function: self.name(),
                                            argument,
                                            column })
        }
    }
}
