pub mod fake_tool;
