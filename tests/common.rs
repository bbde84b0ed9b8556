#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:05:00,2017-01-02 08:06:00,60,Canal St & Madison St,Clinton St & Washington Blvd,Subscriber,Male,1985.0
2,2017-01-02 08:40:00,2017-01-02 08:42:00,120,Canal St & Madison St,Clinton St & Washington Blvd,Subscriber,Female,1990.0
3,2017-01-03 17:10:00,2017-01-03 17:13:00,180,Canal St & Madison St,Streeter Dr & Grand Ave,Customer,,
4,2017-03-06 08:15:00,2017-03-06 08:25:00,600,Streeter Dr & Grand Ave,Canal St & Madison St,Subscriber,Male,1985.0
5,garbage,2017-03-06 09:25:00,600,Streeter Dr & Grand Ave,Canal St & Madison St,Subscriber,Male,1985.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2,2017-06-19 17:05:00,2017-06-19 17:15:00,600.0,15th & K St NW,14th & Belmont St NW,Customer
";

/// Run the binary with HOME pointed at an empty temp dir, so no user
/// configuration leaks into the test.
pub fn rbs(name: &str) -> Command {
    let home = env::temp_dir().join(format!("{name}_rbikeshare_home"));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rbikeshare");
    cmd.env("HOME", &home);
    cmd
}

/// Create a data dir with the Chicago and Washington fixtures (no New York City file).
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");

    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
