mod mm001_test;
mod mm002_test;
mod mm003_test;
mod mm004_test;
mod mm005_test;
mod mm006_test;
mod mm007_test;
mod mm008_test;
mod mm009_test;
