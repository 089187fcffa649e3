mod euriai_client_test;
