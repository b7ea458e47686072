pub const CONFIG_FILE: &str = r#"Config file for retest

Specifies a config file which controls the default behavior of retest. If a config
file is not specified, ${HOME}/.retest.toml is used. If it does not exist the default
options are applied.

Supported options:

flags = "i"               # flags applied when none are given on the command line
backtrack_limit = 100000  # maximum backtracking steps for a single search
color = true              # highlight matches with colors instead of brackets"#;

pub const FLAGS_LONG_HELP: &str = r#"Inline flags applied to the pattern

Flags are prefixed onto the pattern as an inline flags group, so `-f i` turns
`ab` into `(?i)ab`. Accepted letters are defined by the regex engine:

i    case-insensitive
m    multi-line, `^` and `$` match at line boundaries
s    `.` matches newlines
x    ignore whitespace and allow `#` comments
U    swap the meaning of greedy and lazy quantifiers"#;

pub const BACKTRACK_LIMIT_LONG_HELP: &str = r#"Maximum number of backtracking steps for a single search

Patterns using backreferences or look-around are run by a backtracking engine.
When a search exceeds this limit matching stops and the engine's error is shown
in place of the result."#;

pub const RUN_LONG_HELP: &str = r#"Match a pattern against a subject and show the results

The output shows the quoted pattern, the subject with every match highlighted
and the captures of each match. If neither SUBJECT nor --input is given the
subject is read from stdin.

Examples:

retest run 'a(b)?(c)' 'ac abc'
retest run -f i 'error: (\w+)' --input server.log"#;

pub const REPL_LONG_HELP: &str = r#"Edit a pattern and a subject interactively

Every input line is an edit and the results are shown again after each one:

/source/flags    set the pattern and its flags, `\/` is a literal slash. When
                 the literal has no flags, those given with --flags apply
:flags FLAGS     change only the flags of the current pattern
:subject TEXT    set the subject, for text starting with `/` or `:`
:quit            leave the session
anything else    set the subject"#;
