mod local_store_test;
