mod mock_translation_provider_test;
