use clap::{App, Arg, ArgMatches};

/// Trait to add new arguments to the current app
pub trait ArgAugmenter {
    /// Type of struct to output from this parser
    type Output;

    /// Specifies arguments to add
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b>;

    /// Parses the arguments
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> Self::Output;
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Layout of the run files
pub enum RunFileFormat {
    /// `qid Q0 docid rank score tag`
    Trec,
    /// `system \t query \t document \t score`
    Eirex,
}

/// Specifies the files to evaluate
#[derive(Clone, Debug)]
pub struct TaskMeta {
    /// Name of the qrels file
    pub qrels: String,
    /// Names of the run files
    pub runs: Vec<String>,
    /// Layout of the run files
    pub format: RunFileFormat,
    /// If provided, only the first results of each TREC run are read
    pub max_results: Option<usize>,
}

/// Struct defining the input arguments using ArgAugmenter
pub struct TaskArgs;

impl ArgAugmenter for TaskArgs {
    type Output = TaskMeta;

    /// Specifies arguments to add for the input files
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("qrels")
                .index(1)
                .required(true)
                .help("TREC qrels file"),
        )
        .arg(
            Arg::with_name("runs")
                .index(2)
                .required(true)
                .multiple(true)
                .help("Run files to evaluate"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["trec", "eirex"])
                .help("Format of the run files.  Defaults to trec"),
        )
        .arg(
            Arg::with_name("max_results")
                .short("m")
                .long("max-results")
                .takes_value(true)
                .help("Maximum number of results read per TREC run"),
        )
    }

    /// Parses the arguments for the input files
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> Self::Output {
        let qrels = args.value_of("qrels").unwrap_or_default().to_string();
        let runs = args
            .values_of("runs")
            .map(|v| v.map(String::from).collect())
            .unwrap_or_default();
        let format = match args.value_of("format") {
            Some("eirex") => RunFileFormat::Eirex,
            _ => RunFileFormat::Trec,
        };
        let max_results = if args.is_present("max_results") {
            Some(value_t_or_exit!(args, "max_results", usize))
        } else {
            None
        };

        TaskMeta {
            qrels,
            runs,
            format,
            max_results,
        }
    }
}

/// Specifies what to evaluate and how to print it
#[derive(Clone, Debug)]
pub struct OutputMeta {
    /// Evaluation config.  If none is provided, a default set of evaluators is used
    pub config: Option<String>,
    /// Whether to print per-query scores as well as the summary
    pub per_query: bool,
}

/// Struct defining the output arguments using ArgAugmenter
pub struct OutputArgs;

impl ArgAugmenter for OutputArgs {
    type Output = OutputMeta;

    /// Specifies arguments to add for the output
    fn add_args<'a, 'b>(&self, app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("JSON file listing the evaluators to run"),
        )
        .arg(
            Arg::with_name("per_query")
                .short("q")
                .help("Prints the score of every query, not only the summary"),
        )
    }

    /// Parses the arguments for the output
    fn load_from_args<'a>(&self, args: &ArgMatches<'a>) -> Self::Output {
        OutputMeta {
            config: value_t!(args, "config", String).ok(),
            per_query: args.is_present("per_query"),
        }
    }
}
