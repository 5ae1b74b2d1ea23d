//! End-to-end integration tests
//!
//! These tests drive the codec strategies through real files:
//! 1. Write the input text to a temporary file
//! 2. Read it back through a strategy
//! 3. Compare the parsed rows with the expected rows
//!
//! Inputs both codecs agree on are run with both strategies. Cases that depend
//! on the custom reader's lenient quote handling run with the custom strategy
//! only.

#[cfg(test)]
mod tests {
    use custom_csv::cli::StrategyType;
    use custom_csv::harness::{
        generate_test_data, load_data_for_write, run_benchmarks, BenchConfig, GeneratorConfig,
    };
    use custom_csv::{create_strategy, CodecStrategy, Dialect, Row};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn rows(expected: Vec<Vec<&str>>) -> Vec<Row> {
        expected
            .into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect()
    }

    /// Parse `input` with the given strategy and compare against `expected`
    fn run_read_case(input: &str, expected: Vec<Vec<&str>>, strategy_type: StrategyType) {
        let file = create_temp_csv(input);
        let strategy = create_strategy(strategy_type, Dialect::default()).unwrap();

        let actual = strategy
            .read_file(file.path())
            .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", input, e));

        assert_eq!(
            actual,
            rows(expected),
            "\n\nRow mismatch for input {:?} (strategy: {:?})\n",
            input,
            strategy_type
        );
    }

    #[rstest]
    #[case::embedded_newline("x,\"y\nz\",w\n", vec![vec!["x", "y\nz", "w"]])]
    #[case::blank_line_skipped("a,b\n\nc,d\n", vec![vec!["a", "b"], vec!["c", "d"]])]
    #[case::no_trailing_newline("p,q", vec![vec!["p", "q"]])]
    #[case::escaped_quote("\"ab\"\"cd\"", vec![vec!["ab\"cd"]])]
    #[case::written_scenario("a,\"b,c\",\"d\"\"e\"\n", vec![vec!["a", "b,c", "d\"e"]])]
    #[case::crlf_terminators("a,b\r\n\r\nc,d\r\n", vec![vec!["a", "b"], vec!["c", "d"]])]
    #[case::ragged_rows("a\nb,c,d\n", vec![vec!["a"], vec!["b", "c", "d"]])]
    #[case::unicode("naïve,\"日本,語\"\n", vec![vec!["naïve", "日本,語"]])]
    fn test_read_fixtures(
        #[case] input: &str,
        #[case] expected: Vec<Vec<&str>>,
        #[values(StrategyType::Custom, StrategyType::Standard)] strategy: StrategyType,
    ) {
        run_read_case(input, expected, strategy);
    }

    #[rstest]
    #[case::literal_quote_mid_field("ab\"cd,ef\n", vec![vec!["ab\"cd", "ef"]])]
    #[case::text_after_closing_quote("\"ab\"cd,e\n", vec![vec!["abcd", "e"]])]
    #[case::all_empty_fields_skipped("a\n,,\nb\n", vec![vec!["a"], vec!["b"]])]
    #[case::bare_cr_terminator("a\rb\r", vec![vec!["a"], vec!["b"]])]
    fn test_custom_lenient_fixtures(#[case] input: &str, #[case] expected: Vec<Vec<&str>>) {
        run_read_case(input, expected, StrategyType::Custom);
    }

    #[rstest]
    fn test_write_then_read(
        #[values(StrategyType::Custom, StrategyType::Standard)] writer: StrategyType,
        #[values(StrategyType::Custom, StrategyType::Standard)] reader: StrategyType,
    ) {
        let original = rows(vec![
            vec!["ID", "Name", "Quoted_Field"],
            vec!["1", "User_1", "internal \"quote\""],
            vec!["2", "Data, with, commas", "Line 1\nLine 2"],
            vec!["3", "", "trailing"],
        ]);

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("roundtrip.csv");

        create_strategy(writer, Dialect::default())
            .unwrap()
            .write_file(&original, &path)
            .unwrap();
        let parsed = create_strategy(reader, Dialect::default())
            .unwrap()
            .read_file(&path)
            .unwrap();

        assert_eq!(parsed, original, "writer {:?}, reader {:?}", writer, reader);
    }

    #[test]
    fn test_custom_writer_output_bytes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.csv");

        create_strategy(StrategyType::Custom, Dialect::default())
            .unwrap()
            .write_file(&rows(vec![vec!["a", "b,c", "d\"e"]]), &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,\"b,c\",\"d\"\"e\"\n");
    }

    #[test]
    fn test_full_benchmark_pipeline() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_file = dir.path().join("test_data.csv");
        let output_file = dir.path().join("output_bench.csv");
        let dialect = Dialect::default();

        generate_test_data(&GeneratorConfig::new(&data_file, 50, dialect)).unwrap();
        let data = load_data_for_write(&data_file, dialect).unwrap();

        let strategies: Vec<Box<dyn CodecStrategy>> = [StrategyType::Standard, StrategyType::Custom]
            .into_iter()
            .map(|s| create_strategy(s, dialect).unwrap())
            .collect();

        // Both codecs must see the generated file the same way
        for strategy in &strategies {
            assert_eq!(strategy.read_file(&data_file).unwrap(), data);
        }

        let report = run_benchmarks(&BenchConfig::new(&data_file, &output_file, 1), &strategies, &data)
            .unwrap();
        assert_eq!(report.rows, 51);
        assert_eq!(report.timings.len(), 2);
        assert!(!output_file.exists());

        let text = report.to_string();
        assert!(text.contains("Time to Read:"));
        assert!(text.contains("Time to Write:"));
    }
}
