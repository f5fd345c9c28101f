use std::io;
use std::panic;

use super::setup::leave_tui_mode;

/// Restore the terminal before the previous hook prints the panic.
///
/// Install after `color_eyre::install()` so its report hook is the one chained.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_tui_mode(&mut io::stdout());
        previous(info);
    }));
}
