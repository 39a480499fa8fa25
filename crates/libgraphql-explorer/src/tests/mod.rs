mod defaults_tests;
