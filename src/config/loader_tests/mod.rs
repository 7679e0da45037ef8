mod mock_source;
