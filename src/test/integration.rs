/// End to end runs over fixture files: parse, aggregate, settle, report
#[cfg(test)]
mod tests {
    use crate::cli_io::{parse_txns_csv, CliOptions};
    use crate::gst_engine::{aggregate, settle, NegativeAmountPolicy};
    use crate::settlement::SettlementResult;
    use crate::test::utils::{fixture_path, output_path};
    use crate::transaction::TaxHead;
    use csv::ReaderBuilder;
    use rust_decimal::Decimal;

    fn d(val: i64) -> Decimal {
        Decimal::new(val, 0)
    }

    fn settle_fixture(file_root: &str) -> SettlementResult {
        let txns = parse_txns_csv(&fixture_path(&format!("{}.csv", file_root)), true).unwrap();
        settle(&aggregate(&txns).unwrap()).unwrap()
    }

    fn validate_report(file_root: &str, rows: Vec<Vec<&str>>) {
        let f = output_path(file_root, "integration");
        let mut rdr = ReaderBuilder::new().delimiter(b',').from_path(&f).unwrap();
        assert_eq!(
            rdr.headers().unwrap().clone(),
            vec![
                "head",
                "input_credit",
                "output_payable",
                "settled_with_igst",
                "settled_with_cgst",
                "settled_with_sgst",
                "final_payable",
                "unused_credit"
            ]
        );

        let mut records = rdr.records();
        for row in rows.iter() {
            match records.next() {
                Some(record) => assert_eq!(record.unwrap(), *row),
                None => panic!("File is missing Records"),
            }
        }
        if records.next().is_some() {
            panic!("File has excess records")
        }
    }

    fn run_cli(file_root: &str, precedence: Option<&str>) {
        let cli = CliOptions {
            input_file: fixture_path(&format!("{}.csv", file_root)),
            output_file: Some(output_path(file_root, "integration")),
            no_header: false,
            lenient: false,
            negative_amounts: NegativeAmountPolicy::Accept,
            precedence: precedence.map(fixture_path),
        };
        let engine = cli.build_engine().unwrap();
        let res = engine.execute_cli(&cli);
        assert!(res.is_ok(), "Error free is the way to be");
    }

    #[test]
    fn tst_igst_partly_settled() {
        run_cli("simple", None);
        validate_report(
            "simple",
            vec![
                vec!["igst", "60.00", "100.00", "60.00", "0.00", "0.00", "40.00", "0.00"],
                vec!["cgst", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["sgst", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["total", "60.00", "100.00", "60.00", "0.00", "0.00", "40.00", "0.00"],
            ],
        );
    }

    #[test]
    fn tst_cgst_takes_igst_before_cgst() {
        let result = settle_fixture("cgst_igst_first");
        assert_eq!(result.cgst.settled_with_igst, d(30));
        assert_eq!(result.cgst.settled_with_cgst, d(10));
        assert_eq!(result.cgst.settled_with_sgst, Decimal::ZERO);
        assert_eq!(result.cgst.final_payable(), d(10));
    }

    #[test]
    fn tst_sgst_unsettled_by_cgst_credit() {
        let result = settle_fixture("sgst_no_cgst");
        assert_eq!(result.sgst.total_settled(), Decimal::ZERO);
        assert_eq!(result.sgst.final_payable(), d(40));
    }

    #[test]
    fn tst_igst_credit_covers_every_head() {
        run_cli("igst_covers_all", None);
        validate_report(
            "igst_covers_all",
            vec![
                vec!["igst", "200.00", "100.00", "100.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["cgst", "0.00", "50.00", "50.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["sgst", "0.00", "50.00", "50.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["total", "200.00", "200.00", "200.00", "0.00", "0.00", "0.00", "0.00"],
            ],
        );
    }

    #[test]
    fn tst_empty_file() {
        let result = settle_fixture("empty");
        assert_eq!(result, SettlementResult::default());
        for head in TaxHead::ALL {
            assert_eq!(result.head(head).final_payable(), Decimal::ZERO);
        }
    }

    #[test]
    fn tst_precedence_file_reorders_claims() {
        // statutory order lets CGST payable take the shared IGST credit first
        let result = settle_fixture("shared_igst");
        assert_eq!(result.cgst.settled_with_igst, d(30));
        assert_eq!(result.sgst.final_payable(), d(30));

        run_cli("shared_igst", Some("precedence_sgst_first.csv"));
        validate_report(
            "shared_igst",
            vec![
                vec!["igst", "30.00", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["cgst", "0.00", "30.00", "0.00", "0.00", "0.00", "30.00", "0.00"],
                vec!["sgst", "0.00", "30.00", "30.00", "0.00", "0.00", "0.00", "0.00"],
                vec!["total", "30.00", "60.00", "30.00", "0.00", "0.00", "30.00", "0.00"],
            ],
        );
    }
}
