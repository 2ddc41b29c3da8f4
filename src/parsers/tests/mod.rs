mod link_parser_tests;
