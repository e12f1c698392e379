pub mod u101_check_email;
