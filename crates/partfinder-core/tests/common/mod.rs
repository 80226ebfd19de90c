pub mod plate_server;
