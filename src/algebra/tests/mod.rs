mod numeric_array;
