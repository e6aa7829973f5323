mod test_distribute;
