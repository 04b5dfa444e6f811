/// Engine-level configuration for geotext.
#[derive(Debug, Default)]
pub struct Config {
    pub profiling: ProfilingMode,
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded but only visible through an in-process viewer
    On,
    /// Scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebserver,
}

impl Config {
    /// Apply this configuration: install logging and start profiling as requested.
    pub fn apply(&self) {
        match &self.log_filter {
            Some(filter) => crate::logging::init_with_filter(filter),
            None => crate::logging::init(),
        }

        match self.profiling {
            ProfilingMode::Off => {}
            ProfilingMode::On => {
                #[cfg(feature = "profiling")]
                puffin::set_scopes_on(true);
            }
            ProfilingMode::WithWebserver => {
                crate::profiling::init_profiling(crate::profiling::ProfilingBackend::PuffinHttp)
            }
        }
    }
}
