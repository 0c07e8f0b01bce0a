// Main integration test file that includes all test modules

mod integration {
    pub mod registry_workflow_tests;
    pub mod run_tests;
}

mod helpers {
    pub mod fake_snapshot;
    pub mod test_harness;
}
