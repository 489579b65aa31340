//! Test support shared by repository tests.


pub(crate) use db::TestDb;
