use crate::resolve::extract_track_id;

/// Backend endpoints that take a track ID as the final path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Track,
    Features,
    Analysis,
    Complete,
}

impl Endpoint {
    pub fn path_segment(self) -> &'static str {
        match self {
            Endpoint::Track => "track",
            Endpoint::Features => "features",
            Endpoint::Analysis => "analysis",
            Endpoint::Complete => "complete",
        }
    }
}

/// One line of console input, parsed. A bare track reference (URL or ID) is
/// the common case and maps to a plain track lookup; everything else is an
/// explicit keyword followed by its argument.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    Lookup { endpoint: Endpoint, track_id: String },
    Search { query: String },
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let endpoint = match word {
            "quit" | "exit" if rest.is_empty() => return Command::Quit,
            "search" if !rest.is_empty() => {
                return Command::Search {
                    query: rest.to_string(),
                }
            }
            "track" if !rest.is_empty() => Endpoint::Track,
            "features" if !rest.is_empty() => Endpoint::Features,
            "analysis" if !rest.is_empty() => Endpoint::Analysis,
            "complete" if !rest.is_empty() => Endpoint::Complete,
            // Anything else is taken as a bare track reference, whole line.
            _ => {
                return Command::Lookup {
                    endpoint: Endpoint::Track,
                    track_id: extract_track_id(line).to_string(),
                }
            }
        };

        Command::Lookup {
            endpoint,
            track_id: extract_track_id(rest).to_string(),
        }
    }
}
