//! Integration tests for the SMN report pipeline
//!
//! These tests write reports to disk the way the open data endpoint serves
//! them (ISO-8859-1 text, optionally zipped) and run them through reading,
//! parsing and JSON rendering end to end.

use chrono::NaiveDate;
use clap::Parser;
use serde_json::json;
use smn_processor::cli::args::{Args, Commands};
use smn_processor::cli::commands::{current::run_current, forecast::run_forecast};
use smn_processor::fetch::read_report_file;
use smn_processor::{
    FeedKind, SmnError, ToPlainValue, parse_current_report, scan_forecast_report, to_json_string,
};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// Current conditions report with a Latin-1 locality name
const CURRENT_REPORT: &[u8] = b"\
BUENOS AIRES;01-ENE-2020;14:00;Despejado;10 km;25.3;24.0;45;NE 15;1013/\n\
NEUQU\xc9N;01-ENE-2020;14:00;Nublado;500 mts;18.0;No se calcula;60;Calma;1008.4/\n\
\n";

/// Forecast report with the title, blank lines and double rule of the real feed
const FORECAST_REPORT: &[u8] = b"\
Pronostico a 5 dias\n\
\n\
C\xd3RDOBA\n\
================================================================\n\
   FECHA *             TEMPERATURA     VIENTO         PRECIPITACION\n\
                          (\xbaC)    dir(gr) |int(km/h)   (mm)\n\
================================================================\n\
  02/ENE/2020 00Hs.        19.0       180 |  12         0.0\n\
  01/ENE/2020 00Hs.        18.5       120 |  10         0.0\n\
  01/ENE/2020 03Hs.        17.2       135 |   8         1.2\n\
\n\
SAN_JUAN\n\
================================================================\n\
  01/ENE/2020 00Hs.        27.0        45 |  20         0.0\n";

fn write_zipped(path: &Path, entry: &str, contents: &[u8]) {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut buffer);
        writer
            .start_file(entry, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(contents).expect("Failed to write zip entry");
        writer.finish().expect("Failed to finish archive");
    }
    std::fs::write(path, buffer.into_inner()).expect("Failed to write archive");
}

/// Parse a zipped current conditions report and render it as JSON
///
/// Purpose: Validate the archive → Latin-1 → record → JSON path in one go
#[tokio::test]
async fn test_current_report_from_zip_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiepre.zip");
    write_zipped(&path, "tiepre.txt", CURRENT_REPORT);

    let text = read_report_file(&path).await.unwrap();
    let report = parse_current_report(text.lines()).unwrap();
    assert_eq!(report.len(), 2);

    let neuquen = report.require("Neuquén").unwrap();
    assert_eq!(neuquen.visibility_km, 0.5);
    assert_eq!(neuquen.thermal_sensation, None);
    assert_eq!(neuquen.wind.speed, 0.0);
    assert_eq!(neuquen.pressure, None);

    let value = report.to_plain_value();
    assert_eq!(
        value["buenos aires"],
        json!({
            "fecha": "2020-01-01T14:00:00",
            "desc": "Despejado",
            "visibilidad": 10.0,
            "temp": 25.3,
            "termica": 24.0,
            "humedad": 45.0,
            "viento": ["NE", 15.0],
            "presion": 1013.0
        })
    );
    assert!(value.get("neuquén").is_some());
}

/// Scan a plain-text forecast report saved on disk
///
/// Purpose: Validate block detection and date ordering with a realistic layout
#[tokio::test]
async fn test_forecast_report_from_plain_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pron5d.txt");
    std::fs::write(&path, FORECAST_REPORT).unwrap();

    let text = read_report_file(&path).await.unwrap();
    let (forecasts, stats) = scan_forecast_report(text.lines()).unwrap();

    assert_eq!(forecasts.len(), 2);
    assert_eq!(stats.headers_found, 2);
    assert_eq!(stats.data_rows, 4);

    let cordoba = forecasts.require("CÓRDOBA").unwrap();
    assert_eq!(cordoba.len(), 2);
    assert_eq!(cordoba.forecast_for(1, 1, 2020).unwrap()["03"].precipitation, 1.2);

    // Dates come out in calendar order regardless of row order
    let rendered = to_json_string(cordoba, false).unwrap();
    let first = rendered.find("01-01-2020").unwrap();
    let second = rendered.find("02-01-2020").unwrap();
    assert!(first < second);

    let san_juan = forecasts.require("San Juan").unwrap();
    assert_eq!(
        san_juan.to_plain_value(),
        json!({
            "01-01-2020": {
                "00": {"temp": 27.0, "viento_dir": 45, "viento_vel": 20.0, "precip": 0.0}
            }
        })
    );
}

/// Lookups outside the report surface as typed errors
#[tokio::test]
async fn test_forecast_lookup_misses() {
    let (forecasts, _) = scan_forecast_report(
        String::from_utf8_lossy(FORECAST_REPORT).lines(),
    )
    .unwrap();

    let err = forecasts.require("USHUAIA").unwrap_err();
    assert!(err.is_lookup_miss());

    let san_juan = forecasts.require("SAN_JUAN").unwrap();
    let err = san_juan.forecast_for(5, 1, 2020).unwrap_err();
    assert!(matches!(
        err,
        SmnError::DateNotInForecast {
            day: 5,
            month: 1,
            year: 2020
        }
    ));
    assert_eq!(err.to_string(), "The date 5/1/2020 is not in the forecast");
}

/// Run the CLI commands against saved reports
///
/// Purpose: Validate argument handling and summaries without touching the network
#[tokio::test]
async fn test_commands_with_input_files() {
    let dir = tempfile::tempdir().unwrap();
    let current_path = dir.path().join("tiepre.txt");
    let forecast_path = dir.path().join("pron5d.zip");
    std::fs::write(&current_path, CURRENT_REPORT).unwrap();
    write_zipped(&forecast_path, "pron5d.txt", FORECAST_REPORT);

    let args = parse_args(&["current", "-l", "buenos aires", "-i"], &current_path);
    let Some(Commands::Current(current_args)) = &args.command else {
        panic!("expected current command");
    };
    let summary = run_current(&args, current_args).await.unwrap();
    assert_eq!(summary.feed, FeedKind::CurrentConditions);
    assert_eq!((summary.localities, summary.records), (1, 1));

    let args = parse_args(&["forecast", "-l", "Córdoba", "-d", "01-01-2020", "-i"], &forecast_path);
    let Some(Commands::Forecast(forecast_args)) = &args.command else {
        panic!("expected forecast command");
    };
    assert_eq!(forecast_args.date, NaiveDate::from_ymd_opt(2020, 1, 1));
    let summary = run_forecast(&args, forecast_args).await.unwrap();
    assert_eq!(summary.feed, FeedKind::Forecast);
    assert_eq!((summary.localities, summary.records), (1, 2));

    let args = parse_args(&["forecast", "-l", "Córdoba", "-d", "09-01-2020", "-i"], &forecast_path);
    let Some(Commands::Forecast(forecast_args)) = &args.command else {
        panic!("expected forecast command");
    };
    let err = run_forecast(&args, forecast_args).await.unwrap_err();
    assert!(err.to_string().contains("is not in the forecast"));
}

fn parse_args(command: &[&str], input: &Path) -> Args {
    let input = input.to_string_lossy().into_owned();
    let mut argv = vec!["smn-processor", "--quiet"];
    argv.extend_from_slice(command);
    argv.push(&input);
    Args::try_parse_from(argv).unwrap()
}

/// Run the forecast command against a local endpoint instead of a file
///
/// Purpose: Validate that --base-url reaches the feed client download path
#[tokio::test]
async fn test_forecast_command_downloads_from_base_url() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut archive = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut archive);
        writer.start_file("pron5d.txt", SimpleFileOptions::default()).unwrap();
        writer.write_all(FORECAST_REPORT).unwrap();
        writer.finish().unwrap();
    }
    let body = archive.into_inner();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/dpd/zipopendata.php", listener.local_addr().unwrap());
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut chunk = [0u8; 2048];
            let _ = socket.read(&mut chunk).await;
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        }
    });

    let args = Args::try_parse_from([
        "smn-processor",
        "--quiet",
        "--base-url",
        base_url.as_str(),
        "forecast",
        "-l",
        "san juan",
    ])
    .unwrap();
    let Some(Commands::Forecast(forecast_args)) = &args.command else {
        panic!("expected forecast command");
    };

    let summary = run_forecast(&args, forecast_args).await.unwrap();
    assert_eq!(summary.source, base_url);
    assert_eq!((summary.localities, summary.records), (1, 1));
}
