/// How much the binaries log to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    Silent,
    /// Search start and finish, with the final statistics.
    #[default]
    Normal,
    /// Also the progress of the search and each experiment search.
    Verbose,
    /// Everything.
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_grow_with_verbosity() {
        let levels: Vec<tracing::Level> = [
            Verbosity::Silent,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(tracing::Level::from(Verbosity::default()), tracing::Level::INFO);
    }
}
