/// Expands to the tokens after `=>`, once per repetition of the ident before
/// it.
macro_rules! each {
    ($ignored:ident => $($out:tt)*) => {
        $($out)*
    };
}

mod array;
#[cfg(feature = "alloc")]
mod collections;
mod scalar;
mod tuple;
