use sales_peak::analysis::SalesAnalyzer;
use sales_peak::chart::TraceMode;
use sales_peak::error::{ChartError, LoadError};

const FIVE_DAYS: &[u8] = b"Date,Sales_USD\n\
2023-01-01,100\n\
2023-01-02,200\n\
2023-01-03,500\n\
2023-01-04,300\n\
2023-01-05,400\n";

#[test]
fn five_day_table_reports_peak_and_totals() {
    let mut analyzer = SalesAnalyzer::new();
    assert!(analyzer.load(FIVE_DAYS, "week.csv"));

    let peak = analyzer.peak().unwrap();
    assert_eq!(peak.peak_date_label(), "2023-01-03");
    assert_eq!(peak.peak_sales, 500.0);
    assert_eq!(peak.total_sales, 1500.0);
    assert_eq!(peak.average_sales, 300.0);
    assert_eq!(peak.day_count, 5);
}

#[test]
fn ascending_week_peaks_on_the_last_day() {
    let csv = b"Date,Sales_USD\n2023-01-01,100\n2023-01-02,200\n2023-01-03,300\n2023-01-04,400\n2023-01-05,500\n";
    let mut analyzer = SalesAnalyzer::new();
    assert!(analyzer.load(csv, "ascending.csv"));

    let peak = analyzer.peak().unwrap();
    assert_eq!(peak.peak_date_label(), "2023-01-05");
    assert_eq!(peak.peak_sales, 500.0);
    assert_eq!(peak.total_sales, 1500.0);
    assert_eq!(peak.average_sales, 300.0);
    assert_eq!(peak.day_count, 5);
}

#[test]
fn chart_marks_the_peak_day() {
    let mut analyzer = SalesAnalyzer::new();
    assert!(analyzer.load(FIVE_DAYS, "week.csv"));

    let chart = analyzer.peak_chart().unwrap();
    assert_eq!(chart.layout.title.text, "Sales Trend - Peak: $500.0 on 2023-01-03");

    let daily = chart.daily_series().unwrap();
    assert_eq!(daily.y, vec![100.0, 200.0, 500.0, 300.0, 400.0]);
    assert_eq!(daily.mode, TraceMode::LinesMarkers);

    let marker = chart.peak_marker().unwrap();
    assert_eq!(marker.y, vec![500.0]);
    assert_eq!(marker.text.as_deref(), Some(&["2023-01-03".to_string()][..]));

    let json: serde_json::Value = serde_json::from_str(&analyzer.peak_chart_json().unwrap()).unwrap();
    assert_eq!(json["layout"]["height"], 500);
    assert_eq!(json["layout"]["template"], "plotly_white");
    assert_eq!(json["data"][1]["marker"]["color"], "red");
}

#[test]
fn three_columns_are_rejected() {
    let csv = b"Date,Sales_USD,Region\n2023-01-01,100,N\n2023-01-02,200,S\n";
    let mut analyzer = SalesAnalyzer::new();
    assert!(!analyzer.load(csv, "wide.csv"));
    assert!(!analyzer.is_valid());
    assert_eq!(
        analyzer.try_load(csv, "wide.csv").unwrap_err(),
        LoadError::ColumnCount { found: 3 }
    );
}

#[test]
fn text_sales_values_are_rejected() {
    let csv = b"Date,Sales_USD\n2023-01-01,a\n2023-01-02,b\n2023-01-03,c\n";
    let mut analyzer = SalesAnalyzer::new();
    assert!(!analyzer.load(csv, "text.csv"));
    assert!(analyzer.peak().is_none());
}

#[test]
fn single_row_is_not_enough() {
    let mut analyzer = SalesAnalyzer::new();
    assert!(!analyzer.load(b"Date,Sales_USD\n2023-01-01,100\n", "one.csv"));
    assert!(matches!(analyzer.peak_chart(), Err(ChartError::NotReady)));
}

#[test]
fn failed_reload_discards_previous_analysis() {
    let mut analyzer = SalesAnalyzer::new();
    assert!(analyzer.load(FIVE_DAYS, "week.csv"));
    assert!(analyzer.is_valid());

    assert!(!analyzer.load(b"Date\n2023-01-01\n2023-01-02\n", "narrow.csv"));
    assert!(!analyzer.is_valid());
    assert!(analyzer.dataset().is_none());
    assert!(analyzer.peak().is_none());
}

#[test]
fn corrupt_workbook_bytes_are_rejected() {
    let mut analyzer = SalesAnalyzer::new();
    let garbage = b"PK\x03\x04definitely not a zip archive";
    assert!(!analyzer.load(garbage, "broken.xlsx"));
    assert!(matches!(
        analyzer.try_load(garbage, "broken.xlsx"),
        Err(LoadError::Parse { .. })
    ));
}

#[test]
fn empty_input_is_rejected() {
    let mut analyzer = SalesAnalyzer::new();
    assert!(!analyzer.load(b"", "empty.csv"));
}

#[test]
fn currency_formatted_sales_and_mixed_dates_are_accepted() {
    let csv = b"Date,Sales_USD\n2023-02-01,\"$1,200.50\"\n2023/02/02,800\nnot-a-date,5\n";
    let mut analyzer = SalesAnalyzer::new();
    let analysis = analyzer.try_load(csv, "mixed.csv").unwrap();
    assert_eq!(analysis.stats.rows_read, 3);
    assert_eq!(analysis.stats.rows_used, 2);
    assert_eq!(analysis.stats.row_errors[0].line, 4);
    assert_eq!(analysis.peak.peak_sales, 1200.5);
}

#[test]
fn us_slash_dates_peak_on_the_right_day() {
    let csv = b"Date,Sales_USD\n05/01/2023,100\n05/02/2023,900\n05/03/2023,50\n";
    let mut analyzer = SalesAnalyzer::new();
    assert!(analyzer.load(csv, "us.csv"));
    assert_eq!(analyzer.peak().unwrap().peak_date_label(), "2023-05-02");

    let daily = analyzer.peak_chart().unwrap();
    let first = daily.daily_series().unwrap().x[0];
    assert_eq!(first.to_string(), "2023-05-01");
}
