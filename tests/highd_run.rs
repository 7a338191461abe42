use std::fs;
use std::path::PathBuf;

use trajform::config::Config;
use trajform::dataset::highd::METERS_PER_PIXEL;
use trajform::runner::Runner;

const EXPECTED_HEADER: &str = "frameNum,carId,\
carCenterX,carCenterY,\
boundingBox1X,boundingBox1Y,boundingBox2X,boundingBox2Y,\
boundingBox3X,boundingBox3Y,boundingBox4X,boundingBox4Y,\
carCenterXm,carCenterYm,\
boundingBox1Xm,boundingBox1Ym,boundingBox2Xm,boundingBox2Ym,\
boundingBox3Xm,boundingBox3Ym,boundingBox4Xm,boundingBox4Ym,\
heading,course,speed,objClass,carCenterLon,carCenterLat,laneId";

// Column layouts follow the real recordings: more columns than the
// transform reads, so the extras prove they are skipped.
const TRACKS_01: &str = "\
frame,id,x,y,width,height,xVelocity,yVelocity,xAcceleration,laneId
1,1,10.0,5.0,4.0,2.0,3.0,0.0,0.1,2
1,2,0.0,0.0,4.0,2.0,0.0,0.0,0.0,5
";

const META_01: &str = "\
id,width,height,numFrames,class,drivingDirection
1,4.0,2.0,120,Car,2
2,4.0,2.0,80,Truck,1
";

const TRACKS_02: &str = "\
frame,id,x,y,width,height,xVelocity,yVelocity,xAcceleration,laneId
1,1,1.0,1.0,4.0,2.0,1.0,0.0,0.0,3
";

fn setup(tag: &str) -> (PathBuf, PathBuf) {
    let base = std::env::temp_dir().join(format!("trajform-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&base);
    let data = base.join("original_data");
    let save = base.join("processed_data");
    fs::create_dir_all(&data).unwrap();
    (data, save)
}

fn fields(line: &str) -> Vec<String> {
    line.split(',').map(String::from).collect()
}

fn float(fields: &[String], index: usize) -> f64 {
    fields[index].parse().unwrap()
}

#[test]
fn converts_a_recording_end_to_end() {
    let (data, save) = setup("full-run");
    fs::write(data.join("01_tracks.csv"), TRACKS_01).unwrap();
    fs::write(data.join("01_tracksMeta.csv"), META_01).unwrap();
    // companion files in the folder are not conversion inputs
    fs::write(data.join("01_recordingMeta.csv"), "id\n1\n").unwrap();

    let summary = Runner::new(Config {
        dataset: "highD".to_string(),
        data_folder: data,
        save_folder: save.clone(),
    })
    .run()
    .unwrap();

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 0);

    let output = fs::read_to_string(save.join("01_tracks.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], EXPECTED_HEADER);
    assert_eq!(lines.len(), 3);

    // frame 1, car 1: moving Car
    let row = fields(lines[1]);
    assert_eq!(row[0], "1");
    assert_eq!(row[1], "1");
    assert!((float(&row, 12) - 12.0).abs() < 1e-9); // carCenterXm
    assert!((float(&row, 13) - 6.0).abs() < 1e-9); // carCenterYm
    assert!((float(&row, 14) - 14.0).abs() < 1e-9); // boundingBox1Xm
    assert!((float(&row, 15) - 5.0).abs() < 1e-9); // boundingBox1Ym
    assert!((float(&row, 18) - 10.0).abs() < 1e-9); // boundingBox3Xm
    assert!((float(&row, 19) - 7.0).abs() < 1e-9); // boundingBox3Ym
    assert!((float(&row, 22)).abs() < 1e-9); // heading
    assert_eq!(float(&row, 23), -1.0); // course
    assert!((float(&row, 24) - 3.0).abs() < 1e-9); // speed
    assert_eq!(row[25], "0"); // objClass: Car
    assert_eq!(float(&row, 26), -1.0); // carCenterLon
    assert_eq!(float(&row, 27), -1.0); // carCenterLat
    assert_eq!(row[28], "2"); // laneId

    // pixel twins are the metric fields over the background image scale
    assert!((float(&row, 2) - 12.0 / METERS_PER_PIXEL).abs() < 1e-6);
    assert!((float(&row, 3) - 6.0 / METERS_PER_PIXEL).abs() < 1e-6);
    assert!((float(&row, 4) - 14.0 / METERS_PER_PIXEL).abs() < 1e-6);
    assert!((float(&row, 5) - 5.0 / METERS_PER_PIXEL).abs() < 1e-6);

    // frame 1, car 2: stationary Truck in the upper lane group
    let row = fields(lines[2]);
    assert_eq!(row[1], "2");
    assert!((float(&row, 22) - 180.0).abs() < 1e-9); // heading from direction group
    assert!(float(&row, 24).abs() < 1e-9); // speed
    assert_eq!(row[25], "3"); // objClass: Truck
    assert_eq!(row[28], "5"); // laneId
}

#[test]
fn missing_metadata_fails_only_that_input() {
    let (data, save) = setup("missing-meta");
    fs::write(data.join("01_tracks.csv"), TRACKS_01).unwrap();
    fs::write(data.join("01_tracksMeta.csv"), META_01).unwrap();
    // no 02_tracksMeta.csv
    fs::write(data.join("02_tracks.csv"), TRACKS_02).unwrap();

    let summary = Runner::new(Config {
        dataset: "highD".to_string(),
        data_folder: data,
        save_folder: save.clone(),
    })
    .run()
    .unwrap();

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);
    assert!(save.join("01_tracks.csv").is_file());
    assert!(!save.join("02_tracks.csv").exists());
}

#[test]
fn stub_dataset_converts_nothing() {
    let (data, save) = setup("ind-stub");
    fs::write(data.join("00_tracks.csv"), TRACKS_01).unwrap();

    let summary = Runner::new(Config {
        dataset: "inD".to_string(),
        data_folder: data,
        save_folder: save.clone(),
    })
    .run()
    .unwrap();

    assert_eq!(summary.converted, 0);
    assert_eq!(summary.failed, 1);
    assert!(!save.join("00_tracks.csv").exists());
}

#[test]
fn empty_data_folder_yields_an_empty_run() {
    let (data, save) = setup("empty-folder");

    let summary = Runner::new(Config {
        dataset: "highD".to_string(),
        data_folder: data,
        save_folder: save.clone(),
    })
    .run()
    .unwrap();

    assert_eq!(summary.converted, 0);
    assert_eq!(summary.failed, 0);
    assert!(save.is_dir());
}
