/*!

Without the `logging` feature there is no backend. The configuration API still works so callers
do not need to care which features are enabled: `log::max_level()` tracks the most verbose level
any module is configured for.

*/

use crate::log::LogConfiguration;

impl LogConfiguration {
    pub(in crate::log) fn set_config(&mut self) {
        let max_level = self
            .module_levels()
            .into_iter()
            .map(|(_, level)| level)
            .fold(self.global_log_level, Ord::max);
        log::set_max_level(max_level);
    }
}
