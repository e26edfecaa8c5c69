mod accessor_tile_tests;
