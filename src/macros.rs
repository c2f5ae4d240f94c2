/// Print a progress line to stdout only when verbose output is on.
///
/// `render_all` and `run` use it for the diagnostics behind `--verbose`:
/// how many entries were loaded, how many categories they fall into, and
/// the canvas size of each chart before it is drawn. The `Saved:` lines and
/// the summary block are printed unconditionally and do not go through it.
///
/// Callers pass `cfg!(feature = "verbose") && flag` (or a plain `bool`), so
/// building without the `verbose` feature makes the condition a constant
/// `false` and the message is compiled out.
///
/// # Example
///
/// ```rust
/// use benchplot::print_if;
///
/// let verbose = true;
/// let (width, height) = (2100, 1200);
/// print_if!(verbose, "Rendering ns/op comparison ({width}x{height} px)");
/// ```
#[macro_export]
macro_rules! print_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            println!($($arg)*);
        }
    };
}
