mod testcase;


pub use testcase::db_test_case;
