mod test_execution;
mod test_utils;
