mod voiceover_service_test;
